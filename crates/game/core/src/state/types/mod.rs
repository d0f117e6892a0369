//! State data types: identifiers, actors, items, turn bookkeeping.
mod actor;
mod common;
mod item;
mod turn;

pub use actor::{
    ActorState, AiKind, Equipment, Inventory, InventoryFull, Progression, RenderOrder,
};
pub use common::{EntityId, Position, Rgb};
pub use item::{
    Consumable, DamageType, EquipSlot, Equippable, Item, ItemEntry, ItemId, ItemLocation,
    ItemsState,
};
pub use turn::TurnState;
