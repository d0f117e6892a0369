//! Built-in actor and item catalog.
//!
//! These constructors are the canonical content set; the RON files under
//! `data/` carry the same definitions for data-driven embedders.

use delve_core::{
    AiKind, Consumable, DamageType, DiceSpec, Equippable, Item, Rgb,
};
use delve_core::stats::AbilityScores;
use serde::{Deserialize, Serialize};

/// Serializable ability-score spec (scores only; modifiers derive on build).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySpec {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilitySpec {
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn to_scores(self) -> AbilityScores {
        AbilityScores::new(
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        )
    }
}

impl Default for AbilitySpec {
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

/// Everything needed to spawn an actor except its id and position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorTemplate {
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    pub ai: Option<AiKind>,
    pub hp: i32,
    #[serde(default)]
    pub base_defense: i32,
    #[serde(default)]
    pub abilities: AbilitySpec,
    #[serde(default)]
    pub xp_given: u32,
    pub inventory_capacity: usize,

    /// Starting weapon, equipped at spawn.
    pub weapon: Option<Item>,

    /// Starting armor, equipped at spawn.
    pub armor: Option<Item>,
}

// ============================================================================
// Actors
// ============================================================================

pub fn player() -> ActorTemplate {
    ActorTemplate {
        glyph: '@',
        color: Rgb(255, 255, 255),
        name: "Player".into(),
        ai: Some(AiKind::Hostile),
        hp: 30,
        base_defense: 0,
        abilities: AbilitySpec::new(18, 14, 14, 10, 12, 10),
        xp_given: 0,
        inventory_capacity: 26,
        weapon: Some(dagger()),
        armor: Some(leather_armor()),
    }
}

pub fn orc() -> ActorTemplate {
    ActorTemplate {
        glyph: 'o',
        color: Rgb(63, 127, 63),
        name: "Orc".into(),
        ai: Some(AiKind::Hostile),
        hp: 10,
        base_defense: 0,
        abilities: AbilitySpec::new(16, 14, 16, 8, 12, 10),
        xp_given: 35,
        inventory_capacity: 0,
        weapon: Some(sword()),
        armor: None,
    }
}

pub fn goblin_pyro() -> ActorTemplate {
    ActorTemplate {
        glyph: 'G',
        color: Rgb(0, 127, 0),
        name: "Goblin Pyro".into(),
        ai: Some(AiKind::Hostile),
        hp: 16,
        base_defense: 0,
        abilities: AbilitySpec::new(10, 18, 14, 10, 8, 16),
        xp_given: 100,
        inventory_capacity: 0,
        weapon: None,
        armor: None,
    }
}

// ============================================================================
// Items
// ============================================================================

pub fn dagger() -> Item {
    Item::new('/', Rgb(0, 191, 255), "Dagger")
        .with_equippable(Equippable::weapon(DiceSpec::new(1, 4), DamageType::Slashing))
}

pub fn sword() -> Item {
    Item::new('/', Rgb(0, 191, 255), "Sword")
        .with_equippable(Equippable::weapon(DiceSpec::new(1, 6), DamageType::Slashing))
}

pub fn leather_armor() -> Item {
    Item::new('[', Rgb(139, 69, 19), "Leather Armor").with_equippable(Equippable::armor(1))
}

pub fn chain_mail() -> Item {
    Item::new('[', Rgb(139, 69, 19), "Chain Mail").with_equippable(Equippable::armor(4))
}

pub fn health_potion() -> Item {
    Item::new('!', Rgb(127, 0, 255), "Health Potion")
        .with_consumable(Consumable::Heal { amount: 4 })
}

pub fn lightning_scroll() -> Item {
    Item::new('~', Rgb(255, 255, 0), "Lightning Scroll").with_consumable(Consumable::Lightning {
        damage: 20,
        maximum_range: 5,
    })
}
