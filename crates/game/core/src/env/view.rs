use super::MapOracle;
use crate::state::{ActorState, EntityId, GameState, Position};

/// Combined spatial contract consumed by action validation.
pub trait SpatialQuery {
    fn in_bounds(&self, position: Position) -> bool;
    fn walkable(&self, position: Position) -> bool;
    /// Any entity at `position` whose `blocks_movement` is set.
    fn blocking_entity_at(&self, position: Position) -> Option<EntityId>;
    /// Living actor at `position`. Corpses never count.
    fn actor_at(&self, position: Position) -> Option<EntityId>;
}

/// Read-only merge of the static map with the live game state.
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    pub state: &'a GameState,
    pub map: &'a dyn MapOracle,
}

impl<'a> WorldView<'a> {
    pub fn new(state: &'a GameState, map: &'a dyn MapOracle) -> Self {
        Self { state, map }
    }

    pub fn actor(&self, id: EntityId) -> Option<&'a ActorState> {
        self.state.entities.actor(id)
    }

    /// Tile is in bounds, walkable and unoccupied by a blocking entity.
    pub fn can_enter(&self, position: Position) -> bool {
        self.in_bounds(position)
            && self.walkable(position)
            && self.blocking_entity_at(position).is_none()
    }
}

impl SpatialQuery for WorldView<'_> {
    fn in_bounds(&self, position: Position) -> bool {
        self.map.contains(position)
    }

    fn walkable(&self, position: Position) -> bool {
        self.map.walkable(position)
    }

    fn blocking_entity_at(&self, position: Position) -> Option<EntityId> {
        self.state.entities.blocking_actor_at(position)
    }

    fn actor_at(&self, position: Position) -> Option<EntityId> {
        self.state
            .entities
            .living_actor_at(position)
            .map(|actor| actor.id)
    }
}
