//! Traits describing read-only world data.
//!
//! The map oracle exposes static geometry; [`WorldView`] merges it with the
//! live state into the [`SpatialQuery`] surface actions validate against.
//! Floor regeneration is delegated to a [`FloorGenerator`].
mod map;
mod view;

pub use map::{
    FloorGenerator, GeneratedFloor, MapDimensions, MapOracle, StaticTile, TerrainKind,
};
pub use view::{SpatialQuery, WorldView};
