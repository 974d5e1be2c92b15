//! Item catalog loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::ItemCatalog;

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// RON format: `Catalog(entries: [ItemTemplate, ...])`
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}
