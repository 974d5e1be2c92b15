use super::{ActorState, EntityId, Position};

/// Aggregate state for every actor on the active floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: Vec<ActorState>,
}

impl EntitiesState {
    pub fn new(player: ActorState, npcs: Vec<ActorState>) -> Self {
        Self { player, npcs }
    }

    /// Returns a reference to an actor by ID (player or NPC).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.npcs.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or NPC).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// Returns an iterator over all actors (player + NPCs), dead or alive.
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    /// Returns the living actor standing at `position`, if any.
    pub fn living_actor_at(&self, position: Position) -> Option<&ActorState> {
        self.all_actors()
            .find(|actor| actor.is_alive() && actor.position == position)
    }

    /// Returns the id of any movement-blocking actor at `position`.
    pub fn blocking_actor_at(&self, position: Position) -> Option<EntityId> {
        self.all_actors()
            .find(|actor| actor.blocks_movement && actor.position == position)
            .map(|actor| actor.id)
    }
}
