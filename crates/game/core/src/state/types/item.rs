//! Items and the central item registry.
//!
//! Every item in play lives in [`ItemsState`]; containers (the ground, an
//! actor's inventory, an equipment slot) hold [`ItemId`] handles. Ownership
//! is explicit: each entry carries its current [`ItemLocation`], updated on
//! every transfer and never inferred.

use crate::dice::DiceSpec;

use super::common::{EntityId, Position, Rgb};

/// Handle for an item tracked in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Equipment slot categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// Damage type tag carried by weapons and named in combat narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    Slashing,
    Piercing,
    Bludgeoning,
}

/// Equippable capability: slot, weapon dice, and flat stat bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equippable {
    pub slot: EquipSlot,

    /// Damage pool rolled on a weapon hit.
    pub damage: DiceSpec,
    pub damage_type: DamageType,

    /// Flat bonus to the wielder's power while in the weapon slot.
    pub power_bonus: i32,

    /// Flat bonus to the wearer's defense while in the armor slot.
    pub defense_bonus: i32,

    /// Reserved for future scaling rules; carried but not yet consulted.
    pub item_level: i32,
}

impl Equippable {
    pub fn weapon(damage: DiceSpec, damage_type: DamageType) -> Self {
        Self {
            slot: EquipSlot::Weapon,
            damage,
            damage_type,
            power_bonus: 0,
            defense_bonus: 0,
            item_level: 0,
        }
    }

    pub fn armor(defense_bonus: i32) -> Self {
        Self {
            slot: EquipSlot::Armor,
            damage: DiceSpec::new(1, 4),
            damage_type: DamageType::Bludgeoning,
            power_bonus: 0,
            defense_bonus,
            item_level: 0,
        }
    }
}

/// Consumable capability: what happens when the item is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    /// Restore hit points to the consumer.
    Heal { amount: i32 },

    /// Strike the nearest other live actor within range.
    Lightning { damage: i32, maximum_range: i32 },
}

/// An item: display state plus optional capabilities.
///
/// Capabilities are explicit optional fields; their absence is a checkable
/// state, not a null-dereference hazard.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    pub consumable: Option<Consumable>,
    pub equippable: Option<Equippable>,
}

impl Item {
    pub fn new(glyph: char, color: Rgb, name: impl Into<String>) -> Self {
        Self {
            glyph,
            color,
            name: name.into(),
            consumable: None,
            equippable: None,
        }
    }

    pub fn with_consumable(mut self, consumable: Consumable) -> Self {
        self.consumable = Some(consumable);
        self
    }

    pub fn with_equippable(mut self, equippable: Equippable) -> Self {
        self.equippable = Some(equippable);
        self
    }
}

/// The container currently owning an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemLocation {
    /// Unowned, lying on the map at a tile.
    Ground(Position),

    /// Owned by an actor (in the inventory or referenced by an equipment
    /// slot); carried items have no position of their own.
    Carried(EntityId),
}

/// Registry entry pairing an item with its ownership record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub id: ItemId,
    pub item: Item,
    pub location: ItemLocation,
}

/// Central registry owning every item in play.
///
/// Entry order is stable (spawn order), which fixes the scan order for
/// ground pickups.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsState {
    next_id: u32,
    entries: Vec<ItemEntry>,
}

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the registry at the given location.
    pub fn spawn(&mut self, item: Item, location: ItemLocation) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(ItemEntry { id, item, location });
        id
    }

    /// Remove an item from play entirely (consumed items).
    pub fn remove(&mut self, id: ItemId) -> Option<ItemEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entry(&self, id: ItemId) -> Option<&ItemEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.entry(id).map(|entry| &entry.item)
    }

    pub fn location(&self, id: ItemId) -> Option<ItemLocation> {
        self.entry(id).map(|entry| entry.location)
    }

    /// Move an item to a new container, returning the previous location.
    /// `None` means the item is not in the registry.
    pub fn reparent(&mut self, id: ItemId, location: ItemLocation) -> Option<ItemLocation> {
        let entry = self.entries.iter_mut().find(|entry| entry.id == id)?;
        let previous = entry.location;
        entry.location = location;
        Some(previous)
    }

    /// Ground items at a tile, in registry (spawn) order.
    pub fn ground_at(&self, position: Position) -> impl Iterator<Item = &ItemEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.location == ItemLocation::Ground(position))
    }

    /// First ground item at a tile in scan order, if any.
    pub fn first_ground_at(&self, position: Position) -> Option<ItemId> {
        self.ground_at(position).map(|entry| entry.id).next()
    }

    pub fn is_carried_by(&self, id: ItemId, actor: EntityId) -> bool {
        self.location(id) == Some(ItemLocation::Carried(actor))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock() -> Item {
        Item::new('*', Rgb(128, 128, 128), "Rock")
    }

    #[test]
    fn ground_scan_preserves_spawn_order() {
        let mut items = ItemsState::new();
        let tile = Position::new(3, 3);
        let first = items.spawn(rock(), ItemLocation::Ground(tile));
        let _elsewhere = items.spawn(rock(), ItemLocation::Ground(Position::new(9, 9)));
        let second = items.spawn(rock(), ItemLocation::Ground(tile));

        let found: Vec<ItemId> = items.ground_at(tile).map(|entry| entry.id).collect();
        assert_eq!(found, vec![first, second]);
        assert_eq!(items.first_ground_at(tile), Some(first));
    }

    #[test]
    fn reparent_moves_ownership_and_reports_previous() {
        let mut items = ItemsState::new();
        let tile = Position::new(1, 1);
        let id = items.spawn(rock(), ItemLocation::Ground(tile));

        let previous = items.reparent(id, ItemLocation::Carried(EntityId::PLAYER));
        assert_eq!(previous, Some(ItemLocation::Ground(tile)));
        assert!(items.is_carried_by(id, EntityId::PLAYER));
        assert_eq!(items.first_ground_at(tile), None);
    }

    #[test]
    fn remove_takes_the_item_out_of_play() {
        let mut items = ItemsState::new();
        let id = items.spawn(rock(), ItemLocation::Carried(EntityId::PLAYER));
        assert!(items.remove(id).is_some());
        assert!(items.entry(id).is_none());
        assert!(items.remove(id).is_none());
    }

    #[test]
    fn damage_type_names_read_lowercase() {
        assert_eq!(DamageType::Slashing.to_string(), "slashing");
        assert_eq!(DamageType::Bludgeoning.to_string(), "bludgeoning");
    }
}
