use crate::action::ActionTransition;
use crate::context::ActionContext;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::message::MessageTone;
use crate::state::{EntityId, GameState, ItemLocation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickupError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// No ground item at the actor's tile.
    #[error("There is nothing here to pick up.")]
    NothingHere,

    /// An item is present but the inventory has no room.
    #[error("Your inventory is full.")]
    InventoryFull,
}

impl GameError for PickupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::NothingHere | Self::InventoryFull => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "PICKUP_ACTOR_NOT_FOUND",
            Self::NothingHere => "PICKUP_NOTHING_HERE",
            Self::InventoryFull => "PICKUP_INVENTORY_FULL",
        }
    }
}

/// Pick up the first ground item at the actor's own tile.
///
/// "First" is the registry's stable scan order, so repeated pickups on a
/// stacked tile drain it oldest-spawn first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for PickupAction {
    type Error = PickupError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(PickupError::ActorNotFound(self.actor))?;

        if state.entities.items.first_ground_at(actor.position).is_none() {
            return Err(PickupError::NothingHere);
        }
        if actor.inventory.is_full() {
            return Err(PickupError::InventoryFull);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(PickupError::ActorNotFound(self.actor))?;
        let position = actor.position;

        let item_id = state
            .entities
            .items
            .first_ground_at(position)
            .ok_or(PickupError::NothingHere)?;
        let item_name = state
            .entities
            .items
            .item(item_id)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(PickupError::ActorNotFound(self.actor))?;
        actor
            .inventory
            .push(item_id)
            .map_err(|_| PickupError::InventoryFull)?;
        state
            .entities
            .items
            .reparent(item_id, ItemLocation::Carried(self.actor));

        ctx.log.add_message(
            format!("You picked up the {item_name}!"),
            MessageTone::Info,
        );
        Ok(())
    }
}
