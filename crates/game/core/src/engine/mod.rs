//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]: every
//! mutation flows through `execute()`, which enforces turn legality,
//! resolves dispatcher actions, and runs the three-phase transition
//! (pre_validate → apply → post_validate). A validation failure surfaces
//! before anything is touched, so denied actions leave the world unchanged
//! and the turn nonce unmoved.

use crate::action::{Action, ActionError, ActionTransition};
use crate::context::ActionContext;
use crate::error::GameError;
use crate::state::{EntityId, GameState};

/// Game engine executing one action per turn-step.
pub struct GameEngine<'s> {
    state: &'s mut GameState,
}

impl<'s> GameEngine<'s> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'s mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Hand the turn to an actor and refill its action budget.
    pub fn begin_turn(&mut self, actor: EntityId) -> Result<(), ActionError> {
        let actor_state = self
            .state
            .entities
            .actor_mut(actor)
            .ok_or(ActionError::ActorNotFound(actor))?;
        actor_state.stats.reset_actions();
        self.state.turn.current_actor = actor;
        Ok(())
    }

    /// Executes an action through the transition pipeline.
    ///
    /// Enforces that the action comes from the actor currently holding the
    /// turn, resolves `Bump` into its concrete variant, and increments the
    /// turn nonce only on success.
    pub fn execute(
        &mut self,
        ctx: &mut ActionContext<'_>,
        action: &Action,
    ) -> Result<(), ActionError> {
        self.validate_actor(action)?;

        tracing::debug!(actor = %action.actor(), kind = action.as_ref(), "executing action");

        let result = match action {
            Action::Bump(bump) => {
                let resolved = bump.resolve(self.state);
                return self.execute(ctx, &resolved);
            }
            Action::Pickup(a) => self.run(ctx, a),
            Action::UseItem(a) => self.run(ctx, a),
            Action::Drop(a) => self.run(ctx, a),
            Action::Equip(a) => self.run(ctx, a),
            Action::Wait(a) => self.run(ctx, a),
            Action::TakeStairs(a) => self.run(ctx, a),
            Action::Melee(a) => self.run(ctx, a),
            Action::Move(a) => self.run(ctx, a),
        };

        match &result {
            Ok(()) => {
                self.state.turn.nonce += 1;
            }
            Err(error) if error.severity().is_internal() => {
                tracing::warn!(
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "action failed with internal error: {error}"
                );
            }
            Err(_) => {}
        }

        result
    }

    fn run<A>(&mut self, ctx: &mut ActionContext<'_>, action: &A) -> Result<(), ActionError>
    where
        A: ActionTransition,
        ActionError: From<A::Error>,
    {
        action
            .pre_validate(self.state, &ctx.env)
            .map_err(ActionError::from)?;
        action.apply(self.state, ctx).map_err(ActionError::from)?;
        action
            .post_validate(self.state, &ctx.env)
            .map_err(ActionError::from)?;
        Ok(())
    }

    /// Rejects actions issued by anyone but the current turn holder.
    fn validate_actor(&self, action: &Action) -> Result<(), ActionError> {
        let current = self.state.turn.current_actor;
        let actor = action.actor();
        if actor != current {
            return Err(ActionError::NotActorsTurn { actor, current });
        }
        Ok(())
    }
}
