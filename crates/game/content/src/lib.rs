//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON data
//! files:
//! - Actor templates (player and monsters)
//! - Item definitions (weapons, armor, consumables)
//! - A spawn factory that materializes templates into game state
//!
//! The built-in catalog mirrors the shipped `data/` files so embedders can
//! work file-free; both paths produce the same templates.

pub mod catalog;
pub mod factory;
pub mod loaders;

pub use catalog::{AbilitySpec, ActorTemplate};
pub use factory::ContentFactory;
pub use loaders::{ActorLoader, ItemLoader, LoadResult};
