//! Map data loader.
//!
//! Loads pure terrain data from map RON files. Entity placement is handled
//! separately via scenario files.

use std::path::Path;

use delve_core::{MapDimensions, Position, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::map::StaticMap;

/// Map data structure for RON files (terrain only).
///
/// Either draw the map with `rows` (`#` wall, `.` floor) or give
/// `dimensions` for an all-floor map; `tiles` override single tiles in both
/// cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    #[serde(default)]
    dimensions: Option<(u32, u32)>,
    #[serde(default)]
    rows: Vec<String>,
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data from a RON file.
    pub fn load(path: &Path) -> LoadResult<StaticMap> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<StaticMap> {
        let data: MapDataRon = ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
            .from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let mut map = match (data.dimensions, data.rows.is_empty()) {
            (None, false) => StaticMap::from_rows(&data.rows),
            (Some((width, height)), true) => {
                StaticMap::filled(MapDimensions::new(width, height), TerrainKind::Floor)
            }
            (Some(_), false) => anyhow::bail!("Map gives both dimensions and rows"),
            (None, true) => anyhow::bail!("Map needs either dimensions or rows"),
        };

        for (x, y, terrain) in data.tiles {
            map.set(Position::new(x, y), terrain);
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::MapOracle;

    #[test]
    fn rows_with_overrides() {
        let map = MapLoader::parse(
            "(
                rows: [
                    \"#####\",
                    \"#...#\",
                    \"#####\",
                ],
                tiles: [(2, 1, Wall)],
            )",
        )
        .unwrap();

        assert_eq!(map.dimensions(), MapDimensions::new(5, 3));
        assert!(map.walkable(Position::new(1, 1)));
        assert!(!map.walkable(Position::new(2, 1)));
    }

    #[test]
    fn dimensions_fill_with_floor() {
        let map = MapLoader::parse("(dimensions: (3, 2))").unwrap();
        assert!(map.walkable(Position::new(2, 1)));
    }

    #[test]
    fn bare_and_wrapped_dimensions_both_parse() {
        let bare = MapLoader::parse("(dimensions: (9, 7), tiles: [(4, 3, Wall)])").unwrap();
        let wrapped = MapLoader::parse("(dimensions: Some((9, 7)))").unwrap();

        assert_eq!(bare.dimensions(), MapDimensions::new(9, 7));
        assert_eq!(wrapped.dimensions(), MapDimensions::new(9, 7));
        assert!(!bare.walkable(Position::new(4, 3)));
    }

    #[test]
    fn ambiguous_layout_is_rejected() {
        let err = MapLoader::parse(r#"(dimensions: (3, 2), rows: ["..."])"#).unwrap_err();
        assert!(err.to_string().contains("both dimensions and rows"));
    }
}
