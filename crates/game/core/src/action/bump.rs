use crate::action::{Action, Direction, MeleeAction, MovementAction};
use crate::state::{EntityId, GameState, Position};

/// Directional intent dispatcher.
///
/// The canonical action for "move in direction d": resolves into a melee
/// attack when a live actor occupies the destination, a movement step
/// otherwise. The engine resolves a bump before execution, so the chosen
/// variant runs with its own full validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl BumpAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }

    /// Choose the concrete action for this intent.
    ///
    /// With no actor in the registry the movement branch is returned; its
    /// own validation reports the missing actor.
    pub fn resolve(&self, state: &GameState) -> Action {
        let target = state
            .entities
            .actor(self.actor)
            .map(|actor| self.destination_from(actor.position))
            .and_then(|destination| state.entities.live_actor_at(destination));

        if target.is_some() {
            Action::Melee(MeleeAction::new(self.actor, self.direction))
        } else {
            Action::Move(MovementAction::new(self.actor, self.direction))
        }
    }
}
