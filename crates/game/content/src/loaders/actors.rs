//! Actor catalog loader.

use std::path::Path;

use anyhow::Context;

use crate::catalog::ActorTemplate;
use crate::loaders::{LoadResult, read_file};

/// Loader for actor catalogs from RON files.
///
/// RON format: `Vec<(String, ActorTemplate)>`, a list of (actor id,
/// template) pairs.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in catalog file {}", path.display()))
    }

    /// Parse an actor catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<(String, ActorTemplate)>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse actor catalog: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    const SHIPPED_CATALOG: &str = include_str!("../../data/actors.ron");

    #[test]
    fn shipped_catalog_parses_and_matches_builtins() {
        let actors = ActorLoader::parse(SHIPPED_CATALOG).unwrap();
        let ids: Vec<&str> = actors.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["player", "orc", "goblin_pyro"]);

        let player = &actors
            .iter()
            .find(|(id, _)| id == "player")
            .unwrap()
            .1;
        assert_eq!(*player, catalog::player());

        let orc = &actors.iter().find(|(id, _)| id == "orc").unwrap().1;
        assert_eq!(*orc, catalog::orc());
    }

    #[test]
    fn load_round_trips_through_a_file() {
        let serialized = ron::to_string(&vec![
            ("orc".to_string(), catalog::orc()),
            ("goblin_pyro".to_string(), catalog::goblin_pyro()),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actors.ron");
        std::fs::write(&path, serialized).unwrap();

        let loaded = ActorLoader::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].1, catalog::orc());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = ActorLoader::load(Path::new("/nonexistent/actors.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/actors.ron"));
    }
}
