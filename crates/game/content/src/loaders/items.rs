//! Item catalog loader.

use std::path::Path;

use anyhow::Context;
use delve_core::Item;

use crate::loaders::{LoadResult, read_file};

/// Loader for item catalogs from RON files.
///
/// RON format: `Vec<(String, Item)>`, a list of (item id, definition)
/// pairs.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, Item)>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in catalog file {}", path.display()))
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<(String, Item)>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse item catalog: {}", e))
    }
}
