//! RON file loaders for catalog data.
//!
//! All loaders deserialize straight into core/content types with serde; a
//! malformed file surfaces as a contextualized `anyhow` error naming the
//! path and the parse failure.

mod actors;
mod items;

pub use actors::ActorLoader;
pub use items::ItemLoader;

use std::path::Path;

pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
