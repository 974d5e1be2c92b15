pub mod actor;
pub mod common;
pub mod entities;
pub mod floor;
pub mod item;
pub mod turn;

// Re-export all actor-related types
pub use actor::{
    ActorState, AiPolicy, CORPSE_COLOR, CORPSE_GLYPH, DeathReport, EquipChange, Equipment,
    Fighter, Grip, Guard, InventoryState, Level, Stance,
};

// Re-export common types
pub use common::{CardinalDirection, Displacement, EntityId, Position, RenderOrder, Rgb};

pub use entities::EntitiesState;
pub use floor::{FloorState, StairDirection};
pub use item::{ConsumableEffect, EquipmentSlot, EquippableData, ItemKind, ItemState};
pub use turn::TurnState;
