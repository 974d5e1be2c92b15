//! Authoritative game state representation.
//!
//! This module owns the data structures that describe actors, items, turn
//! bookkeeping and the active floor. Runtime layers clone or query this state
//! but mutate it exclusively through the engine.
pub mod types;

use crate::env::GeneratedFloor;

pub use types::{
    ActorState, AiPolicy, CORPSE_COLOR, CORPSE_GLYPH, CardinalDirection, ConsumableEffect,
    DeathReport, Displacement, EntitiesState, EntityId, EquipChange, Equipment, EquipmentSlot,
    EquippableData, Fighter, FloorState, Grip, Guard, InventoryState, ItemKind, ItemState, Level,
    Position, RenderOrder, Rgb, Stance, StairDirection, TurnState,
};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused. ID 0 is reserved for the player.
    next_entity_id: u32,

    /// Turn bookkeeping.
    pub turn: TurnState,
    /// Every actor on the active floor, the player included.
    pub entities: EntitiesState,
    /// Items and stairs of the active floor.
    pub floor: FloorState,
}

impl GameState {
    /// Creates a fresh state from the provided sub-components.
    ///
    /// The allocator starts past every id already in use.
    pub fn new(turn: TurnState, entities: EntitiesState, floor: FloorState) -> Self {
        let highest = entities
            .all_actors()
            .map(|actor| actor.id.0)
            .chain(floor.items.iter().map(|item| item.id.0))
            .chain(entities.all_actors().flat_map(|actor| {
                actor
                    .inventory
                    .iter()
                    .flat_map(|inventory| inventory.items.iter().map(|item| item.id.0))
            }))
            .max()
            .unwrap_or(EntityId::PLAYER.0);

        Self {
            next_entity_id: highest.saturating_add(1),
            turn,
            entities,
            floor,
        }
    }

    /// Creates a state holding only the player on an empty first floor.
    pub fn with_player(player: ActorState) -> Self {
        Self::new(
            TurnState::default(),
            EntitiesState::new(player, Vec::new()),
            FloorState::new(1),
        )
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        if self.next_entity_id == EntityId::PLAYER.0 {
            self.next_entity_id += 1;
        }
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.saturating_add(1);
        id
    }

    /// Adds an NPC with a freshly allocated id and returns that id.
    pub fn spawn_npc(&mut self, mut actor: ActorState) -> EntityId {
        let id = self.allocate_entity_id();
        actor.id = id;
        self.entities.npcs.push(actor);
        id
    }

    /// Places an item on the floor with a freshly allocated id.
    pub fn spawn_item(&mut self, mut item: ItemState) -> EntityId {
        let id = self.allocate_entity_id();
        item.id = id;
        self.floor.items.push(item);
        id
    }

    /// Replaces the active floor, dropping every NPC of the previous one.
    pub fn enter_floor(&mut self, floor: FloorState, player_position: Position) {
        self.entities.npcs.clear();
        self.entities.player.position = player_position;
        self.floor = floor;
    }

    /// Installs a generated floor and hands back its map.
    pub fn install_floor<M>(&mut self, generated: GeneratedFloor<M>) -> M {
        self.enter_floor(generated.floor_state(), generated.player_position);
        for npc in generated.npcs {
            self.spawn_npc(npc);
        }
        for item in generated.items {
            self.spawn_item(item);
        }
        generated.map
    }

    #[inline]
    pub fn player(&self) -> &ActorState {
        &self.entities.player
    }
}
