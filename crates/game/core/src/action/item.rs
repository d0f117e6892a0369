//! Inventory-item actions: use, drop, equip.

use crate::action::ActionTransition;
use crate::context::ActionContext;
use crate::death::{self, MortalityError};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::message::MessageTone;
use crate::state::{Consumable, EntityId, GameState, ItemId, ItemLocation, Position};

// ============================================================================
// UseItemAction
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UseItemError {
    #[error(transparent)]
    Mortality(#[from] MortalityError),

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// The item is not owned by the acting entity. Dispatcher bug.
    #[error("item {item} is not carried by actor {actor}")]
    ItemNotCarried { item: ItemId, actor: EntityId },

    #[error("Your health is already full.")]
    HealthAlreadyFull,

    #[error("No enemy is close enough to strike.")]
    NoTargetInRange,
}

impl GameError for UseItemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Mortality(e) => e.severity(),
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::ItemNotCarried { .. } => ErrorSeverity::Internal,
            Self::HealthAlreadyFull | Self::NoTargetInRange => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Mortality(e) => e.error_code(),
            Self::ActorNotFound(_) => "USE_ITEM_ACTOR_NOT_FOUND",
            Self::ItemNotCarried { .. } => "USE_ITEM_NOT_CARRIED",
            Self::HealthAlreadyFull => "USE_ITEM_HEALTH_ALREADY_FULL",
            Self::NoTargetInRange => "USE_ITEM_NO_TARGET_IN_RANGE",
        }
    }
}

/// Use a carried item, delegating to its consumable capability.
///
/// An item without a consumable is a deliberate no-op, not an error. The
/// target position defaults to the actor's own tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: ItemId,
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: ItemId) -> Self {
        Self {
            actor,
            item,
            target: None,
        }
    }

    pub fn at(actor: EntityId, item: ItemId, target: Position) -> Self {
        Self {
            actor,
            item,
            target: Some(target),
        }
    }

    /// Target tile: explicit, or the actor's own position.
    pub fn target_position(&self, state: &GameState) -> Option<Position> {
        self.target.or_else(|| {
            state
                .entities
                .actor(self.actor)
                .map(|actor| actor.position)
        })
    }

    /// Live actor at the resolved target tile.
    pub fn target_actor<'s>(&self, state: &'s GameState) -> Option<&'s crate::state::ActorState> {
        let position = self.target_position(state)?;
        state.entities.live_actor_at(position)
    }

    fn consume(state: &mut GameState, actor: EntityId, item: ItemId) {
        if let Some(holder) = state.entities.actor_mut(actor) {
            holder.inventory.remove(item);
        }
        state.entities.items.remove(item);
    }
}

/// Nearest live actor other than `consumer` within `maximum_range` king
/// moves of `origin`. Ties resolve to the earliest registry entry.
fn nearest_strike_target(
    state: &GameState,
    consumer: EntityId,
    origin: Position,
    maximum_range: i32,
) -> Option<EntityId> {
    let mut closest: Option<(EntityId, i32)> = None;
    for actor in state.entities.actors.iter().filter(|a| a.is_alive()) {
        if actor.id == consumer {
            continue;
        }
        let distance = origin.chebyshev_distance(actor.position);
        if distance > maximum_range {
            continue;
        }
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((actor.id, distance));
        }
    }
    closest.map(|(id, _)| id)
}

impl ActionTransition for UseItemAction {
    type Error = UseItemError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(UseItemError::ActorNotFound(self.actor))?;

        if !state.entities.items.is_carried_by(self.item, self.actor) {
            return Err(UseItemError::ItemNotCarried {
                item: self.item,
                actor: self.actor,
            });
        }

        match state.entities.items.item(self.item).and_then(|i| i.consumable) {
            None => Ok(()),
            Some(Consumable::Heal { .. }) => {
                if actor.stats.hp() == actor.stats.max_hp() {
                    return Err(UseItemError::HealthAlreadyFull);
                }
                Ok(())
            }
            Some(Consumable::Lightning { maximum_range, .. }) => {
                if nearest_strike_target(state, self.actor, actor.position, maximum_range)
                    .is_none()
                {
                    return Err(UseItemError::NoTargetInRange);
                }
                Ok(())
            }
        }
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let Some(consumable) = state.entities.items.item(self.item).and_then(|i| i.consumable)
        else {
            // Nothing to invoke; intentionally permissive.
            return Ok(());
        };
        let item_name = state
            .entities
            .items
            .item(self.item)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        match consumable {
            Consumable::Heal { amount } => {
                let actor = state
                    .entities
                    .actor_mut(self.actor)
                    .ok_or(UseItemError::ActorNotFound(self.actor))?;
                let recovered = actor.stats.heal(amount);
                if recovered == 0 {
                    return Err(UseItemError::HealthAlreadyFull);
                }
                ctx.log.add_message(
                    format!("You consume the {item_name}, and recover {recovered} HP!"),
                    MessageTone::HealthRecovered,
                );
                Self::consume(state, self.actor, self.item);
            }
            Consumable::Lightning {
                damage,
                maximum_range,
            } => {
                let origin = state
                    .entities
                    .actor(self.actor)
                    .ok_or(UseItemError::ActorNotFound(self.actor))?
                    .position;
                let target = nearest_strike_target(state, self.actor, origin, maximum_range)
                    .ok_or(UseItemError::NoTargetInRange)?;
                let target_name = state
                    .entities
                    .actor(target)
                    .map(|actor| actor.name.clone())
                    .unwrap_or_default();

                ctx.log.add_message(
                    format!(
                        "A lightning bolt strikes the {target_name} with a loud thunder, for {damage} damage!"
                    ),
                    MessageTone::PlayerAttack,
                );
                death::apply_damage(state, ctx.log, target, damage)?;
                Self::consume(state, self.actor, self.item);
            }
        }
        Ok(())
    }
}

// ============================================================================
// DropItemAction
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DropItemError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// The item is not owned by the acting entity. Dispatcher bug.
    #[error("item {item} is not carried by actor {actor}")]
    ItemNotCarried { item: ItemId, actor: EntityId },
}

impl GameError for DropItemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::ItemNotCarried { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "DROP_ACTOR_NOT_FOUND",
            Self::ItemNotCarried { .. } => "DROP_ITEM_NOT_CARRIED",
        }
    }
}

/// Drop a carried item onto the actor's tile, unequipping it first if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub actor: EntityId,
    pub item: ItemId,
}

impl DropItemAction {
    pub fn new(actor: EntityId, item: ItemId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropItemAction {
    type Error = DropItemError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state
            .entities
            .actor(self.actor)
            .ok_or(DropItemError::ActorNotFound(self.actor))?;
        if !state.entities.items.is_carried_by(self.item, self.actor) {
            return Err(DropItemError::ItemNotCarried {
                item: self.item,
                actor: self.actor,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let item_name = state
            .entities
            .items
            .item(self.item)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(DropItemError::ActorNotFound(self.actor))?;
        let position = actor.position;

        if actor.equipment.is_equipped(self.item) {
            for slot in [crate::state::EquipSlot::Weapon, crate::state::EquipSlot::Armor] {
                if actor.equipment.slot(slot) == Some(self.item) {
                    actor.equipment.unequip(slot);
                }
            }
            ctx.log.add_message(
                format!("You remove the {item_name}."),
                MessageTone::Info,
            );
        }

        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(DropItemError::ActorNotFound(self.actor))?;
        actor.inventory.remove(self.item);
        state
            .entities
            .items
            .reparent(self.item, ItemLocation::Ground(position));

        ctx.log.add_message(
            format!("You dropped the {item_name}."),
            MessageTone::Info,
        );
        Ok(())
    }
}

// ============================================================================
// EquipAction
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// The item is not owned by the acting entity. Dispatcher bug.
    #[error("item {item} is not carried by actor {actor}")]
    ItemNotCarried { item: ItemId, actor: EntityId },

    /// The dispatcher let a non-equippable item through. Caller bug, not a
    /// recoverable gameplay case.
    #[error("item {item} has no equippable capability")]
    NotEquippable { item: ItemId },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::ItemNotCarried { .. } | Self::NotEquippable { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "EQUIP_ACTOR_NOT_FOUND",
            Self::ItemNotCarried { .. } => "EQUIP_ITEM_NOT_CARRIED",
            Self::NotEquippable { .. } => "EQUIP_NOT_EQUIPPABLE",
        }
    }
}

/// Toggle an item's equip state in the slot matching its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: ItemId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: ItemId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    type Error = EquipError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state
            .entities
            .actor(self.actor)
            .ok_or(EquipError::ActorNotFound(self.actor))?;
        if !state.entities.items.is_carried_by(self.item, self.actor) {
            return Err(EquipError::ItemNotCarried {
                item: self.item,
                actor: self.actor,
            });
        }
        if state
            .entities
            .items
            .item(self.item)
            .and_then(|item| item.equippable)
            .is_none()
        {
            return Err(EquipError::NotEquippable { item: self.item });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let equippable = state
            .entities
            .items
            .item(self.item)
            .and_then(|item| item.equippable)
            .ok_or(EquipError::NotEquippable { item: self.item })?;
        let item_name = state
            .entities
            .items
            .item(self.item)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        let displaced = {
            let actor = state
                .entities
                .actor_mut(self.actor)
                .ok_or(EquipError::ActorNotFound(self.actor))?;

            if actor.equipment.slot(equippable.slot) == Some(self.item) {
                actor.equipment.unequip(equippable.slot);
                ctx.log.add_message(
                    format!("You remove the {item_name}."),
                    MessageTone::Info,
                );
                return Ok(());
            }
            actor.equipment.equip(equippable.slot, self.item)
        };

        // A displaced occupant stays carried; narrate its removal first.
        if let Some(previous) = displaced {
            let previous_name = state
                .entities
                .items
                .item(previous)
                .map(|item| item.name.clone())
                .unwrap_or_default();
            ctx.log.add_message(
                format!("You remove the {previous_name}."),
                MessageTone::Info,
            );
        }
        ctx.log.add_message(
            format!("You equip the {item_name}."),
            MessageTone::Info,
        );
        Ok(())
    }
}
