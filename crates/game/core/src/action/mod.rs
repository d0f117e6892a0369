//! Action domain - one-shot commands over a single turn-step.
//!
//! Each concrete action is a one-shot state machine: `pre_validate` performs
//! every recoverable check against the unmutated state, `apply` performs the
//! mutation and narration, `post_validate` asserts invariants afterwards.
//! A failed validation leaves the world untouched and the turn unconsumed.
//!
//! # Module Structure
//!
//! - `error`: unified [`ActionError`] over the per-action error enums
//! - `direction`: eight-way movement deltas
//! - `movement` / `melee` / `bump`: directional actions and their dispatcher
//! - `pickup` / `item`: inventory traffic (pickup, use, drop, equip)
//! - `wait` / `stairs`: turn pass and floor descent

mod bump;
mod direction;
mod error;
mod item;
mod melee;
mod movement;
mod pickup;
mod stairs;
mod wait;

pub use bump::BumpAction;
pub use direction::Direction;
pub use error::ActionError;
pub use item::{DropItemAction, DropItemError, EquipAction, EquipError, UseItemAction, UseItemError};
pub use melee::{MeleeAction, MeleeError};
pub use movement::{MoveError, MovementAction};
pub use pickup::{PickupAction, PickupError};
pub use stairs::{StairsError, TakeStairsAction};
pub use wait::WaitAction;

use crate::context::ActionContext;
use crate::env::GameEnv;
use crate::state::{EntityId, GameState};

/// Defines how a concrete action variant validates and mutates game state.
///
/// The three phases give actions their all-or-nothing contract:
/// `pre_validate` must raise every recoverable denial before `apply` touches
/// anything, and `post_validate` runs against the mutated state to catch
/// invariant breaks (which are internal faults, never gameplay denials).
pub trait ActionTransition {
    type Error;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Closed set of actions a driver can issue for one turn-step.
///
/// `Bump` is the canonical entry point for "move in direction d": the engine
/// resolves it into `Melee` or `Move` before execution.
#[derive(Clone, Debug, PartialEq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Pickup(PickupAction),
    UseItem(UseItemAction),
    Drop(DropItemAction),
    Equip(EquipAction),
    Wait(WaitAction),
    TakeStairs(TakeStairsAction),
    Bump(BumpAction),
    Melee(MeleeAction),
    Move(MovementAction),
}

impl Action {
    /// Returns the entity performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Pickup(action) => action.actor(),
            Action::UseItem(action) => action.actor(),
            Action::Drop(action) => action.actor(),
            Action::Equip(action) => action.actor(),
            Action::Wait(action) => action.actor(),
            Action::TakeStairs(action) => action.actor(),
            Action::Bump(action) => action.actor,
            Action::Melee(action) => action.actor(),
            Action::Move(action) => action.actor(),
        }
    }
}

impl From<PickupAction> for Action {
    fn from(action: PickupAction) -> Self {
        Self::Pickup(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }
}

impl From<DropItemAction> for Action {
    fn from(action: DropItemAction) -> Self {
        Self::Drop(action)
    }
}

impl From<EquipAction> for Action {
    fn from(action: EquipAction) -> Self {
        Self::Equip(action)
    }
}

impl From<WaitAction> for Action {
    fn from(action: WaitAction) -> Self {
        Self::Wait(action)
    }
}

impl From<TakeStairsAction> for Action {
    fn from(action: TakeStairsAction) -> Self {
        Self::TakeStairs(action)
    }
}

impl From<BumpAction> for Action {
    fn from(action: BumpAction) -> Self {
        Self::Bump(action)
    }
}

impl From<MeleeAction> for Action {
    fn from(action: MeleeAction) -> Self {
        Self::Melee(action)
    }
}

impl From<MovementAction> for Action {
    fn from(action: MovementAction) -> Self {
        Self::Move(action)
    }
}
