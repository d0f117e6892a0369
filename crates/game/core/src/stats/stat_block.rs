//! Combat stat block: hit points, base combat values, action budget.
//!
//! Hit points sit behind a clamping setter that reports the transition it
//! produced; the death handler inspects that transition, so damage must
//! never bypass the setter (the field is private, making that structural).
//! Equipment-dependent values (`power`, `defense`, armor class) are computed
//! at the actor level where the item registry is in reach.

use crate::config::GameConfig;

use super::abilities::AbilityScores;

/// Outcome of an hp write: where the meter was and where it landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpTransition {
    pub previous: i32,
    pub current: i32,
}

impl HpTransition {
    /// True when this write drove a living meter to exactly zero.
    pub fn dropped_to_zero(&self) -> bool {
        self.previous > 0 && self.current == 0
    }
}

/// Per-actor combat statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub abilities: AbilityScores,
    pub base_power: i32,
    pub base_defense: i32,
    max_hp: i32,
    hp: i32,
    max_actions: u32,
    actions_remaining: u32,
}

impl StatBlock {
    pub fn builder() -> StatBlockBuilder {
        StatBlockBuilder::default()
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Write the hp meter, clamped into `[0, max_hp]`.
    ///
    /// Returns the transition so callers can react to a drop to zero. The
    /// death transformation itself lives with the actor, not here.
    pub fn set_hp(&mut self, value: i32) -> HpTransition {
        let previous = self.hp;
        self.hp = value.clamp(0, self.max_hp);
        HpTransition {
            previous,
            current: self.hp,
        }
    }

    /// Restore hit points, never above the maximum.
    ///
    /// Returns the amount actually recovered; 0 at full health, with no
    /// mutation performed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.hp == self.max_hp {
            return 0;
        }
        let transition = self.set_hp(self.hp + amount);
        transition.current - transition.previous
    }

    /// Subtract damage through the hp setter.
    pub fn take_damage(&mut self, amount: i32) -> HpTransition {
        self.set_hp(self.hp - amount)
    }

    pub fn actions_remaining(&self) -> u32 {
        self.actions_remaining
    }

    pub fn max_actions(&self) -> u32 {
        self.max_actions
    }

    /// Spend one action from the turn budget, returning the new remainder.
    pub fn spend_action(&mut self) -> u32 {
        debug_assert!(self.actions_remaining > 0, "spending from an empty budget");
        self.actions_remaining = self.actions_remaining.saturating_sub(1);
        self.actions_remaining
    }

    /// Refill the turn budget to its maximum.
    pub fn reset_actions(&mut self) {
        self.actions_remaining = self.max_actions;
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`StatBlock`].
///
/// When ability scores are supplied, `base_power` is overridden with the
/// strength modifier so combat math runs off the score-derived value. This
/// is a one-time initialization policy; later strength writes do not touch
/// `base_power`.
#[derive(Clone, Debug)]
pub struct StatBlockBuilder {
    hp: i32,
    base_power: i32,
    base_defense: i32,
    abilities: Option<AbilityScores>,
    max_actions: u32,
}

impl StatBlockBuilder {
    pub fn hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn base_power(mut self, base_power: i32) -> Self {
        self.base_power = base_power;
        self
    }

    pub fn base_defense(mut self, base_defense: i32) -> Self {
        self.base_defense = base_defense;
        self
    }

    pub fn abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = Some(abilities);
        self
    }

    pub fn max_actions(mut self, max_actions: u32) -> Self {
        self.max_actions = max_actions;
        self
    }

    pub fn build(self) -> StatBlock {
        let (abilities, base_power) = match self.abilities {
            Some(abilities) => {
                let power = abilities.strength_mod();
                (abilities, power)
            }
            None => (AbilityScores::default(), self.base_power),
        };

        let max_hp = self.hp.max(0);
        StatBlock {
            abilities,
            base_power,
            base_defense: self.base_defense,
            max_hp,
            hp: max_hp,
            max_actions: self.max_actions,
            actions_remaining: self.max_actions,
        }
    }
}

impl Default for StatBlockBuilder {
    fn default() -> Self {
        Self {
            hp: 1,
            base_power: 0,
            base_defense: 0,
            abilities: None,
            max_actions: GameConfig::DEFAULT_ACTIONS_PER_TURN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(hp: i32) -> StatBlock {
        StatBlock::builder().hp(hp).build()
    }

    #[test]
    fn hp_writes_clamp_into_range() {
        let mut stats = block(30);
        stats.set_hp(99);
        assert_eq!(stats.hp(), 30);
        stats.set_hp(-5);
        assert_eq!(stats.hp(), 0);
    }

    #[test]
    fn heal_returns_amount_recovered() {
        let mut stats = block(30);
        stats.set_hp(25);
        assert_eq!(stats.heal(10), 5);
        assert_eq!(stats.hp(), 30);
    }

    #[test]
    fn heal_at_full_health_is_a_no_op() {
        let mut stats = block(30);
        assert_eq!(stats.heal(10), 0);
        assert_eq!(stats.hp(), 30);
    }

    #[test]
    fn cumulative_damage_stops_at_exactly_zero() {
        let mut stats = block(10);
        stats.take_damage(4);
        stats.take_damage(4);
        let transition = stats.take_damage(4);
        assert_eq!(stats.hp(), 0);
        assert_eq!(transition.current, 0);
        assert!(transition.dropped_to_zero());
    }

    #[test]
    fn damage_on_an_empty_meter_is_not_a_zero_transition() {
        let mut stats = block(5);
        stats.take_damage(10);
        let again = stats.take_damage(3);
        assert!(!again.dropped_to_zero());
    }

    #[test]
    fn abilities_override_base_power_with_strength_modifier() {
        let stats = StatBlock::builder()
            .hp(30)
            .base_power(2)
            .abilities(AbilityScores::new(18, 14, 14, 10, 12, 10))
            .build();
        assert_eq!(stats.base_power, 4);
    }

    #[test]
    fn base_power_survives_without_abilities() {
        let stats = StatBlock::builder().hp(10).base_power(2).build();
        assert_eq!(stats.base_power, 2);
    }

    #[test]
    fn action_budget_spends_and_resets() {
        let mut stats = block(10);
        assert_eq!(stats.actions_remaining(), 3);
        assert_eq!(stats.spend_action(), 2);
        stats.spend_action();
        stats.spend_action();
        assert_eq!(stats.actions_remaining(), 0);
        stats.reset_actions();
        assert_eq!(stats.actions_remaining(), 3);
    }
}
