use crate::action::{ActionTransition, Direction};
use crate::context::ActionContext;
use crate::env::{GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::message::MessageTone;
use crate::state::{EntityId, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// Destination outside the map.
    #[error("That way is blocked.")]
    OutOfBounds { destination: Position },

    /// Destination terrain is not walkable.
    #[error("That way is blocked.")]
    Blocked { destination: Position },

    /// Destination occupied by a blocking entity.
    #[error("That way is blocked.")]
    Occupied { destination: Position },

    /// The turn's action budget is spent.
    #[error("You have no actions remaining.")]
    NoActionsRemaining,

    #[error("actor {actor} not at destination {destination} after move")]
    PositionDesync {
        actor: EntityId,
        destination: Position,
    },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(e) => e.severity(),
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::OutOfBounds { .. } | Self::Blocked { .. } | Self::Occupied { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::NoActionsRemaining => ErrorSeverity::Recoverable,
            Self::PositionDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(e) => e.error_code(),
            Self::ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "MOVE_BLOCKED",
            Self::Occupied { .. } => "MOVE_OCCUPIED",
            Self::NoActionsRemaining => "MOVE_NO_ACTIONS_REMAINING",
            Self::PositionDesync { .. } => "MOVE_POSITION_DESYNC",
        }
    }
}

/// Relocate the actor one step, spending one action from the turn budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MovementAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }
}

impl ActionTransition for MovementAction {
    type Error = MoveError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        let destination = self.destination_from(actor.position);

        // Bounds, then terrain, then occupants. The first failing check
        // picks the error variant; the player-facing text is the same.
        let map = env.map()?;
        if !map.contains(destination) {
            return Err(MoveError::OutOfBounds { destination });
        }
        if !map.is_walkable(destination) {
            return Err(MoveError::Blocked { destination });
        }
        if state.entities.blocking_entity_at(destination).is_some() {
            return Err(MoveError::Occupied { destination });
        }

        if actor.stats.actions_remaining() == 0 {
            return Err(MoveError::NoActionsRemaining);
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;

        let remaining = actor.stats.spend_action();
        ctx.log.add_message(
            format!("{} has {} actions remaining.", actor.name, remaining),
            MessageTone::Info,
        );

        actor.position = self.destination_from(actor.position);
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;

        // The mover must be the only blocking occupant of its tile.
        let blocking_here = state
            .entities
            .actors
            .iter()
            .filter(|other| other.position == actor.position && other.blocks_movement)
            .count();
        if actor.blocks_movement && blocking_here != 1 {
            return Err(MoveError::PositionDesync {
                actor: self.actor,
                destination: actor.position,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FloorTracker;
    use crate::env::{GridMap, PcgRng};
    use crate::message::MessageBuffer;
    use crate::state::{
        ActorState, AiKind, Equipment, Inventory, Progression, RenderOrder, Rgb,
    };
    use crate::stats::StatBlock;

    fn hero(id: EntityId, position: Position) -> ActorState {
        ActorState {
            id,
            position,
            glyph: '@',
            color: Rgb::WHITE,
            name: "Hero".into(),
            render_order: RenderOrder::Actor,
            blocks_movement: true,
            ai: Some(AiKind::Hostile),
            stats: StatBlock::builder().hp(30).build(),
            inventory: Inventory::new(26),
            equipment: Equipment::empty(),
            progression: Progression::default(),
        }
    }

    fn state_with_hero_at(position: Position) -> GameState {
        let mut state = GameState::new();
        state.entities.add_actor(hero(EntityId::PLAYER, position));
        state
    }

    fn step(
        state: &mut GameState,
        map: &GridMap,
        direction: Direction,
    ) -> Result<(), MoveError> {
        let rng = PcgRng;
        let env = crate::env::GameEnv::with_all(map, &rng);
        let action = MovementAction::new(EntityId::PLAYER, direction);
        action.pre_validate(state, &env)?;
        let mut log = MessageBuffer::new();
        let mut floors = FloorTracker::default();
        let mut ctx = crate::context::ActionContext::new(env, &mut log, &mut floors);
        action.apply(state, &mut ctx)?;
        action.post_validate(state, &env)
    }

    #[test]
    fn movement_into_a_wall_is_denied_without_side_effects() {
        let map = GridMap::walled(6, 6);
        let mut state = state_with_hero_at(Position::new(1, 1));

        let error = step(&mut state, &map, Direction::West).unwrap_err();

        assert!(matches!(error, MoveError::Blocked { .. }));
        assert_eq!(error.to_string(), "That way is blocked.");
        let actor = state.entities.player().unwrap();
        assert_eq!(actor.position, Position::new(1, 1));
        assert_eq!(actor.stats.actions_remaining(), 3);
    }

    #[test]
    fn movement_out_of_bounds_is_denied() {
        let map = GridMap::walled(6, 6);
        let mut state = state_with_hero_at(Position::new(0, 1));

        let error = step(&mut state, &map, Direction::West).unwrap_err();

        assert!(matches!(error, MoveError::OutOfBounds { .. }));
        assert_eq!(error.to_string(), "That way is blocked.");
        assert_eq!(
            state.entities.player().unwrap().position,
            Position::new(0, 1)
        );
    }

    #[test]
    fn movement_into_a_blocking_actor_is_denied() {
        let map = GridMap::walled(6, 6);
        let mut state = state_with_hero_at(Position::new(1, 1));
        let other = state.entities.allocate_actor_id();
        state.entities.add_actor(hero(other, Position::new(2, 1)));

        let error = step(&mut state, &map, Direction::East).unwrap_err();

        assert!(matches!(error, MoveError::Occupied { .. }));
        assert_eq!(
            state.entities.player().unwrap().position,
            Position::new(1, 1)
        );
    }

    #[test]
    fn successful_movement_spends_exactly_one_action() {
        let map = GridMap::walled(8, 8);
        let mut state = state_with_hero_at(Position::new(1, 1));

        step(&mut state, &map, Direction::East).unwrap();

        let actor = state.entities.player().unwrap();
        assert_eq!(actor.position, Position::new(2, 1));
        assert_eq!(actor.stats.actions_remaining(), 2);
    }

    #[test]
    fn depleted_budget_denies_movement_in_place() {
        let map = GridMap::walled(12, 12);
        let mut state = state_with_hero_at(Position::new(1, 1));

        step(&mut state, &map, Direction::East).unwrap();
        step(&mut state, &map, Direction::East).unwrap();
        step(&mut state, &map, Direction::East).unwrap();
        let error = step(&mut state, &map, Direction::East).unwrap_err();

        assert!(matches!(error, MoveError::NoActionsRemaining));
        assert_eq!(error.to_string(), "You have no actions remaining.");
        let actor = state.entities.player().unwrap();
        assert_eq!(actor.position, Position::new(4, 1));
        assert_eq!(actor.stats.actions_remaining(), 0);
    }

    #[test]
    fn movement_narrates_the_remaining_budget() {
        let map = GridMap::walled(8, 8);
        let mut state = state_with_hero_at(Position::new(1, 1));
        let rng = PcgRng;
        let env = crate::env::GameEnv::with_all(&map, &rng);
        let mut log = MessageBuffer::new();
        let mut floors = FloorTracker::default();
        let mut ctx = crate::context::ActionContext::new(env, &mut log, &mut floors);

        let action = MovementAction::new(EntityId::PLAYER, Direction::North);
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &mut ctx).unwrap();

        assert!(log.contains_text("Hero has 2 actions remaining."));
    }
}
