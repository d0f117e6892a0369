//! Authoritative game state representation.
//!
//! This module owns the data structures that describe actors, items, and
//! turn bookkeeping. Drivers query this state freely but mutate it
//! exclusively through the engine's action pipeline.
pub mod types;

pub use types::{
    ActorState, AiKind, Consumable, DamageType, EntityId, EquipSlot, Equipment, Equippable,
    Inventory, InventoryFull, Item, ItemEntry, ItemId, ItemLocation, ItemsState, Position,
    Progression, RenderOrder, Rgb, TurnState,
};

/// Aggregate state for every entity in play.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    next_actor_id: u32,
    pub actors: Vec<ActorState>,
    pub items: ItemsState,
}

impl EntitiesState {
    pub fn new() -> Self {
        Self {
            // 0 is reserved for the player.
            next_actor_id: 1,
            actors: Vec::new(),
            items: ItemsState::new(),
        }
    }

    /// Allocates a fresh non-player actor id.
    pub fn allocate_actor_id(&mut self) -> EntityId {
        let id = EntityId(self.next_actor_id);
        self.next_actor_id += 1;
        id
    }

    pub fn add_actor(&mut self, actor: ActorState) {
        debug_assert!(
            self.actor(actor.id).is_none(),
            "duplicate actor id {}",
            actor.id
        );
        self.actors.push(actor);
    }

    /// Returns a reference to an actor by id.
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by id.
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.actor(EntityId::PLAYER)
    }

    pub fn player_mut(&mut self) -> Option<&mut ActorState> {
        self.actor_mut(EntityId::PLAYER)
    }

    /// Live actor (AI policy attached) at a tile, if any.
    pub fn live_actor_at(&self, position: Position) -> Option<&ActorState> {
        self.actors
            .iter()
            .find(|actor| actor.position == position && actor.is_alive())
    }

    /// Movement-blocking actor at a tile, if any. Corpses do not block.
    pub fn blocking_entity_at(&self, position: Position) -> Option<&ActorState> {
        self.actors
            .iter()
            .find(|actor| actor.position == position && actor.blocks_movement)
    }
}

impl Default for EntitiesState {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical snapshot of the simulation state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation. Set once at game
    /// initialization; combined with `turn.nonce` per random event.
    pub game_seed: u64,

    /// Turn bookkeeping.
    pub turn: TurnState,

    /// All actors and items tracked on the current floor.
    pub entities: EntitiesState,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            turn: TurnState::default(),
            entities: EntitiesState::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatBlock;

    fn actor_at(id: EntityId, position: Position, alive: bool, blocks: bool) -> ActorState {
        ActorState {
            id,
            position,
            glyph: 'o',
            color: Rgb(63, 127, 63),
            name: "Orc".into(),
            render_order: RenderOrder::Actor,
            blocks_movement: blocks,
            ai: alive.then_some(AiKind::Hostile),
            stats: StatBlock::builder().hp(10).build(),
            inventory: Inventory::new(0),
            equipment: Equipment::empty(),
            progression: Progression::new(35),
        }
    }

    #[test]
    fn live_actor_lookup_skips_corpses() {
        let mut entities = EntitiesState::new();
        let tile = Position::new(4, 4);
        let id = entities.allocate_actor_id();
        entities.add_actor(actor_at(id, tile, false, false));

        assert!(entities.live_actor_at(tile).is_none());
        assert!(entities.blocking_entity_at(tile).is_none());
    }

    #[test]
    fn blocking_lookup_finds_live_actors() {
        let mut entities = EntitiesState::new();
        let tile = Position::new(4, 4);
        let id = entities.allocate_actor_id();
        entities.add_actor(actor_at(id, tile, true, true));

        assert_eq!(entities.live_actor_at(tile).map(|a| a.id), Some(id));
        assert_eq!(entities.blocking_entity_at(tile).map(|a| a.id), Some(id));
    }

    #[test]
    fn allocated_ids_never_collide_with_player() {
        let mut entities = EntitiesState::new();
        let first = entities.allocate_actor_id();
        let second = entities.allocate_actor_id();
        assert_ne!(first, EntityId::PLAYER);
        assert_ne!(first, second);
    }
}
