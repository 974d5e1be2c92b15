//! Content loaders for reading game data from files.
//!
//! Configuration is TOML; catalogs, maps and scenarios are RON. Every loader
//! returns [`LoadResult`] with the failing path in the error message.

pub mod actors;
pub mod config;
pub mod factory;
pub mod item;
pub mod map;
pub mod scenario;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use map::MapLoader;
pub use scenario::{LoadedScenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
