//! Actor state: display, liveness, stats, carried and equipped items.

use crate::stats::StatBlock;

use super::common::{EntityId, Position, Rgb};
use super::item::{EquipSlot, ItemId, ItemsState};

/// Draw priority; lower variants render beneath higher ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

/// Opaque AI policy tag.
///
/// The core consumes this only as a liveness signal: an actor with a policy
/// attached is alive and active, a corpse has none. Decision logic lives
/// outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiKind {
    Hostile,
}

/// Experience bookkeeping for an actor.
///
/// `xp_given` is the reward this actor is worth when it dies; `xp` is what
/// the actor has accumulated. Level thresholds and level-up effects are the
/// driver's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    xp: u32,
    pub xp_given: u32,
}

impl Progression {
    pub fn new(xp_given: u32) -> Self {
        Self { xp: 0, xp_given }
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn add_xp(&mut self, amount: u32) {
        self.xp += amount;
    }
}

/// Equipped-item slots.
///
/// Slots reference carried items by handle; the item itself stays in the
/// registry under `Carried` ownership and is never duplicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    weapon: Option<ItemId>,
    armor: Option<ItemId>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipSlot) -> Option<ItemId> {
        match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Armor => self.armor,
        }
    }

    pub fn weapon(&self) -> Option<ItemId> {
        self.weapon
    }

    pub fn armor(&self) -> Option<ItemId> {
        self.armor
    }

    pub fn is_equipped(&self, id: ItemId) -> bool {
        self.weapon == Some(id) || self.armor == Some(id)
    }

    /// Put an item in a slot, returning the handle it displaced.
    pub fn equip(&mut self, slot: EquipSlot, id: ItemId) -> Option<ItemId> {
        match slot {
            EquipSlot::Weapon => self.weapon.replace(id),
            EquipSlot::Armor => self.armor.replace(id),
        }
    }

    /// Clear a slot, returning the handle it held.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemId> {
        match slot {
            EquipSlot::Weapon => self.weapon.take(),
            EquipSlot::Armor => self.armor.take(),
        }
    }

    /// Power contributed by the weapon slot; 0 when empty.
    pub fn power_bonus(&self, items: &ItemsState) -> i32 {
        self.weapon
            .and_then(|id| items.item(id))
            .and_then(|item| item.equippable)
            .map_or(0, |equippable| equippable.power_bonus)
    }

    /// Defense contributed by the armor slot; 0 when empty.
    pub fn defense_bonus(&self, items: &ItemsState) -> i32 {
        self.armor
            .and_then(|id| items.item(id))
            .and_then(|item| item.equippable)
            .map_or(0, |equippable| equippable.defense_bonus)
    }

    /// Damage pool of the equipped weapon, or the unarmed default (fists).
    pub fn weapon_damage(&self, items: &ItemsState) -> (crate::dice::DiceSpec, super::item::DamageType) {
        use crate::config::GameConfig;

        self.weapon
            .and_then(|id| items.item(id))
            .and_then(|item| item.equippable)
            .map(|equippable| (equippable.damage, equippable.damage_type))
            .unwrap_or((GameConfig::UNARMED_DICE, GameConfig::UNARMED_DAMAGE_TYPE))
    }
}

/// Ordered item storage with a fixed capacity.
///
/// The size limit is enforced at insertion only; removal never fails on
/// capacity grounds. Order is insertion order (display concerns only).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<ItemId>,
    capacity: usize,
}

/// Insertion into a full inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Your inventory is full.")]
pub struct InventoryFull;

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Append an item handle, enforcing the capacity bound.
    pub fn push(&mut self, id: ItemId) -> Result<(), InventoryFull> {
        if self.is_full() {
            return Err(InventoryFull);
        }
        self.items.push(id);
        Ok(())
    }

    /// Remove an item handle. Returns false if it was not present (which is
    /// legal for items held only by an equipment slot).
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|held| *held == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Complete actor state.
///
/// Actors are never deleted; death transforms them in place into corpses
/// (see `crate::death`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub position: Position,

    // === Display ===
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    pub render_order: RenderOrder,

    // === Liveness / collision ===
    pub blocks_movement: bool,
    pub ai: Option<AiKind>,

    // === Components ===
    pub stats: StatBlock,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub progression: Progression,
}

impl ActorState {
    /// Quick liveness check: an actor is alive while its AI policy is
    /// attached.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    /// Power: base plus the live weapon bonus.
    pub fn power(&self, items: &ItemsState) -> i32 {
        self.stats.base_power + self.equipment.power_bonus(items)
    }

    /// Defense: base plus the live armor bonus.
    pub fn defense(&self, items: &ItemsState) -> i32 {
        self.stats.base_defense + self.equipment.defense_bonus(items)
    }

    /// Armor class: 10 + dexterity modifier + defense.
    pub fn armor_class(&self, items: &ItemsState) -> i32 {
        10 + self.stats.abilities.dexterity_mod() + self.defense(items)
    }
}
