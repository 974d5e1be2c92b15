//! Actor catalog loader.
//!
//! Loads actor templates (the player and monsters alike) from RON files.

use std::collections::HashSet;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::{ActorCatalog, ActorTemplate};

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// RON format: `Catalog(entries: [ActorTemplate, ...])`
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        let catalog: ActorCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for template in &catalog.entries {
            validate(template)?;
            if !seen.insert(template.id.as_str()) {
                anyhow::bail!("Duplicate actor template '{}'", template.id);
            }
        }
        Ok(catalog)
    }
}

fn validate(template: &ActorTemplate) -> LoadResult<()> {
    if template.max_hp == 0 {
        anyhow::bail!("Actor template '{}' has zero max_hp", template.id);
    }
    if template.inventory_capacity > delve_core::GameConfig::MAX_INVENTORY_SLOTS {
        anyhow::bail!(
            "Actor template '{}' inventory_capacity {} exceeds {}",
            template.id,
            template.inventory_capacity,
            delve_core::GameConfig::MAX_INVENTORY_SLOTS
        );
    }
    Ok(())
}
