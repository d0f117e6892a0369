//! Death transition and the damage path that triggers it.
//!
//! All damage funnels through [`apply_damage`], which writes hit points
//! through the stat-block setter and performs the corpse transformation the
//! moment a living actor's meter reaches zero. The transformation is
//! terminal and fires exactly once: a corpse has no AI policy, so a second
//! zero-transition can never re-trigger it.

use crate::error::{ErrorSeverity, GameError};
use crate::message::{MessageSink, MessageTone};
use crate::state::{EntityId, GameState, RenderOrder, Rgb};
use crate::stats::HpTransition;

const CORPSE_GLYPH: char = '%';
const CORPSE_COLOR: Rgb = Rgb(191, 0, 0);

/// Damage-path faults. Gameplay denials never originate here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MortalityError {
    #[error("damage target {0} not found")]
    TargetNotFound(EntityId),
}

impl GameError for MortalityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetNotFound(_) => "DEATH_TARGET_NOT_FOUND",
        }
    }
}

/// Apply damage to an actor through the hp setter, resolving death when the
/// write drives a living meter to zero.
pub fn apply_damage(
    state: &mut GameState,
    log: &mut dyn MessageSink,
    target: EntityId,
    amount: i32,
) -> Result<HpTransition, MortalityError> {
    let actor = state
        .entities
        .actor_mut(target)
        .ok_or(MortalityError::TargetNotFound(target))?;

    let had_ai = actor.ai.is_some();
    let transition = actor.stats.take_damage(amount);

    if transition.dropped_to_zero() && had_ai {
        resolve_death(state, log, target);
    }

    Ok(transition)
}

/// Transform a dying actor into a corpse and propagate its XP reward.
///
/// Applied as one logical step: display state, collision, AI, name, and
/// render priority all flip together, then the reward lands on the player's
/// progression component.
fn resolve_death(state: &mut GameState, log: &mut dyn MessageSink, dying: EntityId) {
    let Some(actor) = state.entities.actor_mut(dying) else {
        return;
    };

    let (text, tone) = if dying.is_player() {
        ("You died!".to_string(), MessageTone::PlayerDie)
    } else {
        (format!("{} is dead!", actor.name), MessageTone::EnemyDie)
    };

    actor.glyph = CORPSE_GLYPH;
    actor.color = CORPSE_COLOR;
    actor.blocks_movement = false;
    actor.ai = None;
    actor.name = format!("remains of {}", actor.name);
    actor.render_order = RenderOrder::Corpse;
    let reward = actor.progression.xp_given;

    tracing::info!(actor = %dying, reward, "actor died");
    log.add_message(text, tone);

    if let Some(player) = state.entities.player_mut() {
        player.progression.add_xp(reward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageBuffer;
    use crate::state::{
        ActorState, AiKind, Equipment, Inventory, Position, Progression,
    };
    use crate::stats::StatBlock;

    fn test_state() -> GameState {
        let mut state = GameState::new();
        state.entities.add_actor(ActorState {
            id: EntityId::PLAYER,
            position: Position::new(1, 1),
            glyph: '@',
            color: Rgb::WHITE,
            name: "Player".into(),
            render_order: RenderOrder::Actor,
            blocks_movement: true,
            ai: Some(AiKind::Hostile),
            stats: StatBlock::builder().hp(30).build(),
            inventory: Inventory::new(26),
            equipment: Equipment::empty(),
            progression: Progression::new(0),
        });
        let orc = state.entities.allocate_actor_id();
        state.entities.add_actor(ActorState {
            id: orc,
            position: Position::new(2, 1),
            glyph: 'o',
            color: Rgb(63, 127, 63),
            name: "Orc".into(),
            render_order: RenderOrder::Actor,
            blocks_movement: true,
            ai: Some(AiKind::Hostile),
            stats: StatBlock::builder().hp(10).build(),
            inventory: Inventory::new(0),
            equipment: Equipment::empty(),
            progression: Progression::new(35),
        });
        state
    }

    fn orc_id(state: &GameState) -> EntityId {
        state
            .entities
            .actors
            .iter()
            .find(|a| !a.id.is_player())
            .map(|a| a.id)
            .unwrap()
    }

    #[test]
    fn lethal_damage_transforms_the_actor_into_a_corpse() {
        let mut state = test_state();
        let mut log = MessageBuffer::new();
        let orc = orc_id(&state);

        apply_damage(&mut state, &mut log, orc, 12).unwrap();

        let corpse = state.entities.actor(orc).unwrap();
        assert_eq!(corpse.glyph, '%');
        assert_eq!(corpse.color, Rgb(191, 0, 0));
        assert!(!corpse.blocks_movement);
        assert!(corpse.ai.is_none());
        assert_eq!(corpse.name, "remains of Orc");
        assert_eq!(corpse.render_order, RenderOrder::Corpse);
        assert!(log.contains_text("Orc is dead!"));
    }

    #[test]
    fn death_awards_xp_to_the_player() {
        let mut state = test_state();
        let mut log = MessageBuffer::new();
        let orc = orc_id(&state);

        apply_damage(&mut state, &mut log, orc, 10).unwrap();

        assert_eq!(state.entities.player().unwrap().progression.xp(), 35);
    }

    #[test]
    fn re_damaging_a_corpse_does_not_fire_again() {
        let mut state = test_state();
        let mut log = MessageBuffer::new();
        let orc = orc_id(&state);

        apply_damage(&mut state, &mut log, orc, 10).unwrap();
        let messages_after_death = log.len();
        let xp_after_death = state.entities.player().unwrap().progression.xp();

        apply_damage(&mut state, &mut log, orc, 10).unwrap();

        assert_eq!(log.len(), messages_after_death);
        assert_eq!(
            state.entities.player().unwrap().progression.xp(),
            xp_after_death
        );
        // Still the same corpse, not "remains of remains of".
        assert_eq!(state.entities.actor(orc).unwrap().name, "remains of Orc");
    }

    #[test]
    fn player_death_uses_the_distinct_message() {
        let mut state = test_state();
        let mut log = MessageBuffer::new();

        apply_damage(&mut state, &mut log, EntityId::PLAYER, 99).unwrap();

        let last = log.last().unwrap();
        assert_eq!(last.text, "You died!");
        assert_eq!(last.tone, MessageTone::PlayerDie);
    }

    #[test]
    fn nonlethal_damage_leaves_the_actor_alive() {
        let mut state = test_state();
        let mut log = MessageBuffer::new();
        let orc = orc_id(&state);

        let transition = apply_damage(&mut state, &mut log, orc, 4).unwrap();

        assert_eq!(transition.current, 6);
        assert!(state.entities.actor(orc).unwrap().is_alive());
        assert!(log.is_empty());
    }
}
