//! Randomized-sum dice primitive.
//!
//! A roll sums `count` independent uniform draws over `1..=faces` and adds a
//! flat modifier. Rolls are pure functions of their inputs plus a seed, so
//! the same game state replays to the same outcome and no shared mutable
//! state is involved.

use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};

/// Per-die seed stride; keeps multiple dice in one roll on distinct streams.
const DIE_SEED_STRIDE: u64 = 0x9e3779b97f4a7c15;

/// Shape of a dice pool: how many dice, how many faces each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceSpec {
    pub count: u32,
    pub faces: u32,
}

impl DiceSpec {
    /// The d20 used for attack rolls.
    pub const D20: Self = Self::new(1, 20);

    pub const fn new(count: u32, faces: u32) -> Self {
        Self { count, faces }
    }

    /// Smallest possible sum for this pool (before modifiers).
    pub const fn minimum(self) -> i32 {
        self.count as i32
    }

    /// Largest possible sum for this pool (before modifiers).
    pub const fn maximum(self) -> i32 {
        (self.count * self.faces) as i32
    }
}

impl core::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

/// Rejects degenerate dice pools. Zero dice or zero faces is a caller bug,
/// not a gameplay condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("dice count must be at least 1 (got {count})")]
    InvalidCount { count: u32 },

    #[error("dice faces must be at least 1 (got {faces})")]
    InvalidFaces { faces: u32 },
}

impl GameError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCount { .. } => "DICE_INVALID_COUNT",
            Self::InvalidFaces { .. } => "DICE_INVALID_FACES",
        }
    }
}

/// Roll a dice pool: `count` draws over `[1, faces]` plus `modifier`.
///
/// Requires `count >= 1` and `faces >= 1`. Each die in the pool draws from
/// its own derived seed so the dice are independent.
pub fn roll(
    rng: &dyn RngOracle,
    seed: u64,
    spec: DiceSpec,
    modifier: i32,
) -> Result<i32, DiceError> {
    if spec.count == 0 {
        return Err(DiceError::InvalidCount { count: spec.count });
    }
    if spec.faces == 0 {
        return Err(DiceError::InvalidFaces { faces: spec.faces });
    }

    let mut total = 0i32;
    for die in 0..spec.count {
        let die_seed = seed.wrapping_add((die as u64).wrapping_mul(DIE_SEED_STRIDE));
        total += rng.roll_die(die_seed, spec.faces) as i32;
    }
    Ok(total + modifier)
}

/// Roll 1d20 + modifier, the standard attack-roll shape.
pub fn d20(rng: &dyn RngOracle, seed: u64, modifier: i32) -> i32 {
    rng.roll_die(seed, 20) as i32 + modifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn roll_stays_within_pool_bounds() {
        let rng = PcgRng;
        let spec = DiceSpec::new(3, 6);
        for seed in 0..200 {
            let total = roll(&rng, seed, spec, 0).unwrap();
            assert!(total >= spec.minimum() && total <= spec.maximum());
        }
    }

    #[test]
    fn modifier_is_added_once() {
        let rng = ScriptedRng::with_faces(&[4]);
        let total = roll(&rng, 0, DiceSpec::new(1, 6), 5).unwrap();
        assert_eq!(total, 9);
    }

    #[test]
    fn degenerate_pools_are_rejected() {
        let rng = PcgRng;
        assert_eq!(
            roll(&rng, 0, DiceSpec::new(0, 6), 0),
            Err(DiceError::InvalidCount { count: 0 })
        );
        assert_eq!(
            roll(&rng, 0, DiceSpec::new(1, 0), 0),
            Err(DiceError::InvalidFaces { faces: 0 })
        );
    }

    #[test]
    fn d20_is_in_attack_roll_range() {
        let rng = PcgRng;
        for seed in 0..100 {
            let value = d20(&rng, seed, 4);
            assert!((5..=24).contains(&value));
        }
    }

    #[test]
    fn dice_in_one_pool_are_independent() {
        // Two dice must not simply repeat the same draw.
        let rng = PcgRng;
        let mut saw_different = false;
        for seed in 0..50 {
            let a = rng.roll_die(seed, 1000);
            let b = rng.roll_die(seed.wrapping_add(DIE_SEED_STRIDE), 1000);
            if a != b {
                saw_different = true;
                break;
            }
        }
        assert!(saw_different);
    }
}
