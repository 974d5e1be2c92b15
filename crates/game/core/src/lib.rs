//! Deterministic turn-resolution and combat rules.
//!
//! `delve-core` defines the canonical rules (actions, combat, engine, state)
//! and exposes pure APIs reused by the runtime and offline tools. All state
//! mutation flows through [`engine::GameEngine`], and supporting crates depend
//! on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod state;

pub use action::{
    Action, ActionContext, ActionOutcome, ActionTransition, AttackStyle, BumpAction, DodgeAction,
    DropAction, EquipAction, Impossible, ImpossibleReason, MeleeAction, MoveAction, PickupAction,
    TakeStairsAction, ToggleBlockAction, ToggleTwoHandAction, UseItemAction, WaitAction,
};
pub use combat::{CombatSnapshot, MeleeResolution, resolve_melee};
pub use config::{CombatTuning, GameConfig};
pub use engine::{ExecutionOutcome, GameEngine};
pub use env::{
    FloorGenerator, GeneratedFloor, MapDimensions, MapOracle, SpatialQuery, StaticTile,
    TerrainKind, WorldView,
};
pub use error::{ErrorSeverity, GameError};
pub use log::{LogEntry, MessageSink, MessageStyle};
pub use state::{
    ActorState, AiPolicy, CardinalDirection, ConsumableEffect, DeathReport, Displacement,
    EntitiesState, EntityId, EquipChange, Equipment, EquipmentSlot, EquippableData, Fighter,
    FloorState, GameState, Grip, Guard, InventoryState, ItemKind, ItemState, Level, Position,
    RenderOrder, Rgb, Stance, StairDirection, TurnState,
};
