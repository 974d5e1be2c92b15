//! Static floor layouts.

use delve_core::{MapDimensions, MapOracle, Position, StaticTile, TerrainKind};

/// Immutable terrain grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticMap {
    dimensions: MapDimensions,
    terrain: Vec<TerrainKind>,
}

impl StaticMap {
    /// Creates a map filled with `fill`.
    pub fn filled(dimensions: MapDimensions, fill: TerrainKind) -> Self {
        let len = dimensions.width as usize * dimensions.height as usize;
        Self {
            dimensions,
            terrain: vec![fill; len],
        }
    }

    /// Parses rows of glyphs: `#` wall, `.` floor, anything else void.
    ///
    /// Short rows are padded with void.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0) as u32;
        let mut map = Self::filled(MapDimensions::new(width, rows.len() as u32), TerrainKind::Void);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate() {
                let terrain = match glyph {
                    '#' => TerrainKind::Wall,
                    '.' => TerrainKind::Floor,
                    _ => TerrainKind::Void,
                };
                map.set(Position::new(x as i32, y as i32), terrain);
            }
        }
        map
    }

    /// Overrides one tile. Out-of-bounds positions are ignored.
    pub fn set(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.terrain[index] = terrain;
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions.contains(position).then(|| {
            position.y as usize * self.dimensions.width as usize + position.x as usize
        })
    }
}

impl MapOracle for StaticMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position)
            .map(|index| StaticTile::new(self.terrain[index]))
    }
}
