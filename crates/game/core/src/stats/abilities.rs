//! Ability scores and their derived roll modifiers.
//!
//! The six scores are the stored source of truth. Each write clamps the
//! score to zero or above and immediately recomputes the paired modifier,
//! so combat math reads a finished value instead of deriving one per roll.

/// Derive the roll modifier for an ability score.
///
/// Formula: `floor((score - 10) / 2)`, true floor division so sub-10 scores
/// produce the expected negative modifiers (7 → -2, not -1).
pub const fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// The six ability scores with recompute-on-write modifiers.
///
/// Fields are private: all writes go through the setters so the stored
/// modifiers can never drift from the scores.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
    strength_mod: i32,
    dexterity_mod: i32,
    constitution_mod: i32,
    intelligence_mod: i32,
    wisdom_mod: i32,
    charisma_mod: i32,
}

impl AbilityScores {
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        let mut scores = Self {
            strength: 0,
            dexterity: 0,
            constitution: 0,
            intelligence: 0,
            wisdom: 0,
            charisma: 0,
            strength_mod: 0,
            dexterity_mod: 0,
            constitution_mod: 0,
            intelligence_mod: 0,
            wisdom_mod: 0,
            charisma_mod: 0,
        };
        scores.set_strength(strength);
        scores.set_dexterity(dexterity);
        scores.set_constitution(constitution);
        scores.set_intelligence(intelligence);
        scores.set_wisdom(wisdom);
        scores.set_charisma(charisma);
        scores
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn dexterity(&self) -> i32 {
        self.dexterity
    }

    pub fn constitution(&self) -> i32 {
        self.constitution
    }

    pub fn intelligence(&self) -> i32 {
        self.intelligence
    }

    pub fn wisdom(&self) -> i32 {
        self.wisdom
    }

    pub fn charisma(&self) -> i32 {
        self.charisma
    }

    pub fn strength_mod(&self) -> i32 {
        self.strength_mod
    }

    pub fn dexterity_mod(&self) -> i32 {
        self.dexterity_mod
    }

    pub fn constitution_mod(&self) -> i32 {
        self.constitution_mod
    }

    pub fn intelligence_mod(&self) -> i32 {
        self.intelligence_mod
    }

    pub fn wisdom_mod(&self) -> i32 {
        self.wisdom_mod
    }

    pub fn charisma_mod(&self) -> i32 {
        self.charisma_mod
    }

    pub fn set_strength(&mut self, value: i32) {
        self.strength = value.max(0);
        self.strength_mod = ability_modifier(self.strength);
    }

    pub fn set_dexterity(&mut self, value: i32) {
        self.dexterity = value.max(0);
        self.dexterity_mod = ability_modifier(self.dexterity);
    }

    pub fn set_constitution(&mut self, value: i32) {
        self.constitution = value.max(0);
        self.constitution_mod = ability_modifier(self.constitution);
    }

    pub fn set_intelligence(&mut self, value: i32) {
        self.intelligence = value.max(0);
        self.intelligence_mod = ability_modifier(self.intelligence);
    }

    pub fn set_wisdom(&mut self, value: i32) {
        self.wisdom = value.max(0);
        self.wisdom_mod = ability_modifier(self.wisdom);
    }

    pub fn set_charisma(&mut self, value: i32) {
        self.charisma = value.max(0);
        self.charisma_mod = ability_modifier(self.charisma);
    }
}

impl Default for AbilityScores {
    /// Average human: all scores 10, all modifiers 0.
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}
