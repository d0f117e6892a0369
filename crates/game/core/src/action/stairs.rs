use crate::action::ActionTransition;
use crate::context::ActionContext;
use crate::env::{GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::message::MessageTone;
use crate::state::{EntityId, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StairsError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// The actor is not standing on the downstairs tile.
    #[error("There are no stairs here.")]
    NoStairs,
}

impl GameError for StairsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(e) => e.severity(),
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::NoStairs => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(e) => e.error_code(),
            Self::ActorNotFound(_) => "STAIRS_ACTOR_NOT_FOUND",
            Self::NoStairs => "STAIRS_NO_STAIRS_HERE",
        }
    }
}

/// Descend the staircase under the actor, advancing to the next floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
    type Error = StairsError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(StairsError::ActorNotFound(self.actor))?;

        if actor.position != env.map()?.downstairs_location() {
            return Err(StairsError::NoStairs);
        }
        Ok(())
    }

    fn apply(&self, _state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        tracing::info!(actor = %self.actor, "descending staircase");
        ctx.floors.advance_floor();
        ctx.log.add_message(
            "You descend the staircase.".to_string(),
            MessageTone::Descend,
        );
        Ok(())
    }
}
