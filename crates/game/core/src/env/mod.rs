//! Traits describing read-only world data.
//!
//! Oracles expose static map geometry and the deterministic random source.
//! The [`GameEnv`] aggregate bundles them so actions can access everything
//! they need without hard coupling to concrete implementations.
mod error;
mod map;
mod rng;

pub use error::OracleError;
pub use map::{GridMap, MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};

/// Aggregates the read-only oracles required by the action pipeline.
///
/// Oracles are optional at construction so partial environments can be wired
/// up for tooling and tests; accessors return [`OracleError`] when an action
/// reaches for a missing collaborator.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    map: Option<&'a dyn MapOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(map: Option<&'a dyn MapOracle>, rng: Option<&'a dyn RngOracle>) -> Self {
        Self { map, rng }
    }

    pub fn with_all(map: &'a dyn MapOracle, rng: &'a dyn RngOracle) -> Self {
        Self::new(Some(map), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            rng: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    pub fn map(&self) -> Result<&'a dyn MapOracle, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("map", &self.map.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
