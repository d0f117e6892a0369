//! Action resolution rules for a turn-based dungeon crawl.
//!
//! `delve-core` defines the canonical rules (actions, combat, stats, world
//! state) and exposes pure APIs that can be reused by any driver: a terminal
//! client, an AI harness, or offline tools. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod context;
pub mod death;
pub mod dice;
pub mod engine;
pub mod env;
pub mod error;
pub mod message;
pub mod state;
pub mod stats;

pub use action::{
    Action, ActionError, ActionTransition, BumpAction, Direction, DropItemAction, EquipAction,
    MeleeAction, MovementAction, PickupAction, TakeStairsAction, UseItemAction, WaitAction,
};
pub use combat::{AttackResult, resolve_melee};
pub use config::GameConfig;
pub use context::{ActionContext, FloorController, FloorTracker};
pub use dice::{DiceError, DiceSpec};
pub use engine::GameEngine;
pub use env::{
    GameEnv, GridMap, MapDimensions, MapOracle, OracleError, PcgRng, RngOracle, ScriptedRng,
    StaticTile, TerrainKind, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use message::{Message, MessageBuffer, MessageSink, MessageTone};
pub use state::{
    ActorState, AiKind, Consumable, DamageType, EntitiesState, EntityId, EquipSlot, Equipment,
    Equippable, GameState, Inventory, Item, ItemEntry, ItemId, ItemLocation, ItemsState, Position,
    Progression, RenderOrder, Rgb, TurnState,
};
pub use stats::{AbilityScores, HpTransition, StatBlock, ability_modifier};
