use crate::dice::DiceSpec;
use crate::state::DamageType;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of actions an actor may spend per turn (three-action economy).
    pub actions_per_turn: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Damage dice used when attacking with no weapon equipped.
    pub const UNARMED_DICE: DiceSpec = DiceSpec::new(1, 4);
    /// Damage type dealt by unarmed strikes.
    pub const UNARMED_DAMAGE_TYPE: DamageType = DamageType::Bludgeoning;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACTIONS_PER_TURN: u32 = 3;
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 26;

    pub fn new() -> Self {
        Self {
            actions_per_turn: Self::DEFAULT_ACTIONS_PER_TURN,
        }
    }

    pub fn with_actions_per_turn(actions_per_turn: u32) -> Self {
        Self { actions_per_turn }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
