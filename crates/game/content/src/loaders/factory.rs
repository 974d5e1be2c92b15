//! Content factory for building play sessions from data files.

use std::path::{Path, PathBuf};

use delve_core::GameConfig;

use crate::loaders::{
    ActorLoader, ConfigLoader, ItemLoader, LoadResult, LoadedScenario, MapLoader, ScenarioLoader,
};
use crate::map::StaticMap;
use crate::templates::{ActorCatalog, ItemCatalog};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// ├── items.ron
/// ├── maps/
/// │   └── cellar.ron
/// └── scenarios/
///     └── demo.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load actor catalog from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorCatalog> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load a map from `maps/{name}.ron`.
    pub fn load_map(&self, name: &str) -> LoadResult<StaticMap> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", name));
        MapLoader::load(&path)
    }

    /// Load and resolve `scenarios/{name}.ron` against the catalogs.
    pub fn load_scenario(&self, name: &str) -> LoadResult<LoadedScenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        let scenario = ScenarioLoader::load(&path)?;
        let actors = self.load_actors()?;
        let items = self.load_items()?;
        ScenarioLoader::resolve(scenario, &actors, &items, |map| self.load_map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_data_dir(dir: &Path) {
        fs::create_dir_all(dir.join("maps")).unwrap();
        fs::create_dir_all(dir.join("scenarios")).unwrap();
        fs::write(
            dir.join("actors.ron"),
            r#"Catalog(entries: [
                (id: "player", name: "Player", glyph: '@', color: (255, 255, 255),
                 max_hp: 30, max_stam: 10, defense: 2, power: 5, stam_cost: 2,
                 inventory_capacity: 26, equipment: true),
            ])"#,
        )
        .unwrap();
        fs::write(dir.join("items.ron"), "Catalog(entries: [])").unwrap();
        fs::write(
            dir.join("maps/closet.ron"),
            "(rows: [\"###\", \"#.#\", \"###\"])",
        )
        .unwrap();
        fs::write(
            dir.join("scenarios/solo.ron"),
            r#"(
                player: (template: "player", position: (x: 1, y: 1)),
                floors: [(map: "closet", arrival: Some((x: 1, y: 1)))],
            )"#,
        )
        .unwrap();
    }

    #[test]
    fn loads_scenario_and_defaults_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path());
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        let loaded = factory.load_scenario("solo").unwrap();
        assert_eq!(loaded.state.floor.depth, 1);
        assert!(loaded.script.is_empty());
    }

    #[test]
    fn missing_map_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path());
        fs::remove_file(dir.path().join("maps/closet.ron")).unwrap();

        let err = ContentFactory::new(dir.path())
            .load_scenario("solo")
            .unwrap_err();
        assert!(err.to_string().contains("closet.ron"));
    }
}
