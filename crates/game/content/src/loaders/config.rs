//! Game configuration loader.

use std::path::Path;

use delve_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Omitted fields keep their defaults, so an empty file is valid.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [combat]
            dodge_stamina_cost = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.combat.dodge_stamina_cost, 3);
        assert_eq!(config.combat.heavy_power_percent, 160);
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn load_reports_path_on_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[combat\nbroken").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
