//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Map layouts (data-driven via RON)
//! - Actor and item templates (data-driven via RON)
//! - Scenarios with scripted player input (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Floors reached by stairs are served by [`PresetFloors`], which implements
//! the core floor generator over authored layouts.

pub mod floors;
pub mod map;
pub mod scenario;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use floors::{PresetFloor, PresetFloors};
pub use map::StaticMap;
pub use scenario::{FloorSpec, Placement, PlayerCommand, PlayerSpec, Scenario};
pub use templates::{ActorCatalog, ActorTemplate, Catalog, ItemCatalog, ItemTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult, LoadedScenario, MapLoader,
    ScenarioLoader,
};
