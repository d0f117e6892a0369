use core::convert::Infallible;

use crate::action::ActionTransition;
use crate::context::ActionContext;
use crate::state::{EntityId, GameState};

/// Pass the turn without doing anything. Always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Error = Infallible;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(
        &self,
        _state: &mut GameState,
        _ctx: &mut ActionContext<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
