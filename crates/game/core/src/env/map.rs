use crate::state::{ActorState, FloorState, GameState, ItemState, Position, StairDirection};

/// Static map oracle exposing immutable layout information.
pub trait MapOracle {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// True when the tile exists and its terrain can be walked on.
    fn walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_passable)
    }
}

impl<M: MapOracle + ?Sized> MapOracle for &M {
    fn dimensions(&self) -> MapDimensions {
        (**self).dimensions()
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        (**self).tile(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
    Void,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Produces the next floor when an actor takes the stairs.
///
/// Implementations own layout generation and population. The caller swaps the
/// returned map and floor into place in one step and allocates fresh ids for
/// every spawned NPC and item.
pub trait FloorGenerator {
    type Map: MapOracle;

    fn generate_floor(
        &mut self,
        direction: StairDirection,
        state: &GameState,
    ) -> GeneratedFloor<Self::Map>;
}

/// Output of a [`FloorGenerator`].
#[derive(Clone, Debug)]
pub struct GeneratedFloor<M> {
    pub map: M,
    pub depth: u32,
    pub downstairs: Option<Position>,
    pub upstairs: Option<Position>,
    /// Where the player arrives.
    pub player_position: Position,
    pub npcs: Vec<ActorState>,
    pub items: Vec<ItemState>,
}

impl<M> GeneratedFloor<M> {
    /// Floor state for the new level, before any items are spawned.
    pub fn floor_state(&self) -> FloorState {
        FloorState::new(self.depth).with_stairs(self.downstairs, self.upstairs)
    }
}
