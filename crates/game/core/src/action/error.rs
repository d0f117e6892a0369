//! Unified action error surface.
//!
//! Concrete actions keep their own error enums next to their validation
//! logic; [`ActionError`] folds them into the single type the engine
//! returns. The driver's contract is severity-based: a recoverable error is
//! a denied action whose `Display` text is the user-facing reason, anything
//! else is a fault.

use core::convert::Infallible;

use crate::dice::DiceError;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

use super::item::{DropItemError, EquipError, UseItemError};
use super::melee::MeleeError;
use super::movement::MoveError;
use super::pickup::PickupError;
use super::stairs::StairsError;

/// Any failure produced while executing an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Melee(#[from] MeleeError),

    #[error(transparent)]
    Pickup(#[from] PickupError),

    #[error(transparent)]
    UseItem(#[from] UseItemError),

    #[error(transparent)]
    Drop(#[from] DropItemError),

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error(transparent)]
    Stairs(#[from] StairsError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Dice(#[from] DiceError),

    /// Action issued by an entity that does not hold the turn.
    #[error("entity {actor} acted out of turn (current actor is {current})")]
    NotActorsTurn { actor: EntityId, current: EntityId },

    /// Acting entity missing from the registry.
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),
}

impl ActionError {
    /// True for denied-but-retryable actions (the "impossible" signal).
    ///
    /// The turn was not consumed and no state changed; the driver should
    /// surface [`ActionError::reason`] and re-prompt.
    pub fn is_impossible(&self) -> bool {
        self.severity().is_recoverable()
    }

    /// User-facing reason string for a denied action.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Move(e) => e.severity(),
            Self::Melee(e) => e.severity(),
            Self::Pickup(e) => e.severity(),
            Self::UseItem(e) => e.severity(),
            Self::Drop(e) => e.severity(),
            Self::Equip(e) => e.severity(),
            Self::Stairs(e) => e.severity(),
            Self::Oracle(e) => e.severity(),
            Self::Dice(e) => e.severity(),
            Self::NotActorsTurn { .. } => ErrorSeverity::Validation,
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Move(e) => e.error_code(),
            Self::Melee(e) => e.error_code(),
            Self::Pickup(e) => e.error_code(),
            Self::UseItem(e) => e.error_code(),
            Self::Drop(e) => e.error_code(),
            Self::Equip(e) => e.error_code(),
            Self::Stairs(e) => e.error_code(),
            Self::Oracle(e) => e.error_code(),
            Self::Dice(e) => e.error_code(),
            Self::NotActorsTurn { .. } => "ACTION_NOT_ACTORS_TURN",
            Self::ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
        }
    }
}

impl From<Infallible> for ActionError {
    fn from(error: Infallible) -> Self {
        match error {}
    }
}
