use crate::action::{ActionTransition, Direction};
use crate::combat::resolve_melee;
use crate::context::ActionContext;
use crate::death::{self, MortalityError};
use crate::dice::DiceError;
use crate::env::{GameEnv, OracleError, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::message::MessageTone;
use crate::state::{EntityId, GameState, Position};

/// Per-roll seed contexts: 0 = attack roll, 1 = damage roll.
const ATTACK_ROLL_CONTEXT: u32 = 0;
const DAMAGE_ROLL_CONTEXT: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MeleeError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Mortality(#[from] MortalityError),

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// No live actor at the destination tile.
    #[error("Nothing to attack.")]
    NothingToAttack,
}

impl GameError for MeleeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(e) => e.severity(),
            Self::Dice(e) => e.severity(),
            Self::Mortality(e) => e.severity(),
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::NothingToAttack => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(e) => e.error_code(),
            Self::Dice(e) => e.error_code(),
            Self::Mortality(e) => e.error_code(),
            Self::ActorNotFound(_) => "MELEE_ACTOR_NOT_FOUND",
            Self::NothingToAttack => "MELEE_NOTHING_TO_ATTACK",
        }
    }
}

/// Strike the live actor one step away in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MeleeAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }
}

impl ActionTransition for MeleeAction {
    type Error = MeleeError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(MeleeError::ActorNotFound(self.actor))?;
        let destination = self.destination_from(actor.position);

        if state.entities.live_actor_at(destination).is_none() {
            return Err(MeleeError::NothingToAttack);
        }

        // Fail before mutating anything if the random source is missing.
        env.rng()?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &mut ActionContext<'_>) -> Result<(), Self::Error> {
        let attacker = state
            .entities
            .actor(self.actor)
            .ok_or(MeleeError::ActorNotFound(self.actor))?;
        let destination = self.destination_from(attacker.position);
        let attacker_name = attacker.name.clone();
        let strength_mod = attacker.stats.abilities.strength_mod();
        let (weapon_damage, damage_type) =
            attacker.equipment.weapon_damage(&state.entities.items);

        let target = state
            .entities
            .live_actor_at(destination)
            .ok_or(MeleeError::NothingToAttack)?;
        let target_id = target.id;
        let target_name = target.name.clone();
        let armor_class = target.armor_class(&state.entities.items);

        let rng = ctx.env.rng()?;
        let attack_seed = compute_seed(
            state.game_seed,
            state.turn.nonce,
            self.actor.0,
            ATTACK_ROLL_CONTEXT,
        );
        let damage_seed = compute_seed(
            state.game_seed,
            state.turn.nonce,
            self.actor.0,
            DAMAGE_ROLL_CONTEXT,
        );

        let result = resolve_melee(
            rng,
            attack_seed,
            damage_seed,
            strength_mod,
            armor_class,
            weapon_damage,
            damage_type,
        )?;

        let tone = if self.actor.is_player() {
            MessageTone::PlayerAttack
        } else {
            MessageTone::EnemyAttack
        };
        let attack_desc = format!(
            "{} attempts to attack {}",
            capitalize(&attacker_name),
            target_name
        );

        if result.hit {
            ctx.log.add_message(
                format!(
                    "{} and hits! ({} vs. AC{})",
                    attack_desc, result.attack_roll, result.armor_class
                ),
                tone,
            );
        } else {
            ctx.log.add_message(
                format!(
                    "{} and misses. ({} vs. AC{})",
                    attack_desc, result.attack_roll, result.armor_class
                ),
                tone,
            );
        }

        if result.hit {
            if result.damage > 0 {
                ctx.log.add_message(
                    format!(
                        "{} deals {} {} damage.",
                        capitalize(&attacker_name),
                        result.damage,
                        result.damage_type
                    ),
                    tone,
                );
                death::apply_damage(state, ctx.log, target_id, result.damage)?;
            } else {
                ctx.log
                    .add_message("However, they deal no damage.".to_string(), tone);
            }
        }

        Ok(())
    }
}

/// Uppercase the first character, the way names open a sentence.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
