//! Melee attack resolution.

use crate::dice::{self, DiceError, DiceSpec};
use crate::env::RngOracle;
use crate::state::DamageType;

/// Resolved outcome of one melee attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// 1d20 + strength modifier.
    pub attack_roll: i32,

    /// Armor class the roll was compared against.
    pub armor_class: i32,

    /// True when `attack_roll >= armor_class`.
    pub hit: bool,

    /// Damage dealt; 0 on a miss, and only rolled on a hit.
    pub damage: i32,

    pub damage_type: DamageType,
}

/// Resolve one melee attack: roll to hit against armor class, then roll
/// weapon damage only if the attack landed.
///
/// A hit whose damage pool (plus modifier) comes out non-positive deals 0;
/// a landed blow never heals its target.
pub fn resolve_melee(
    rng: &dyn RngOracle,
    attack_seed: u64,
    damage_seed: u64,
    strength_mod: i32,
    armor_class: i32,
    weapon_damage: DiceSpec,
    damage_type: DamageType,
) -> Result<AttackResult, DiceError> {
    let attack_roll = dice::d20(rng, attack_seed, strength_mod);
    let hit = attack_roll >= armor_class;

    let damage = if hit {
        dice::roll(rng, damage_seed, weapon_damage, strength_mod)?.max(0)
    } else {
        0
    };

    Ok(AttackResult {
        attack_roll,
        armor_class,
        hit,
        damage,
        damage_type,
    })
}
