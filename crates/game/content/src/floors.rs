//! Floor generation from a fixed list of authored floors.

use delve_core::{
    ActorState, FloorGenerator, GameState, GeneratedFloor, ItemState, Position, StairDirection,
};

use crate::map::StaticMap;

/// A fully resolved authored floor.
#[derive(Clone, Debug)]
pub struct PresetFloor {
    pub map: StaticMap,
    pub downstairs: Option<Position>,
    pub upstairs: Option<Position>,
    /// Fallback arrival tile.
    pub entry: Position,
    pub npcs: Vec<ActorState>,
    pub items: Vec<ItemState>,
}

impl PresetFloor {
    /// Where the player lands when arriving by `direction`.
    ///
    /// Descending arrives on the up staircase, ascending on the down one.
    pub fn arrival(&self, direction: StairDirection) -> Position {
        let stairs = match direction {
            StairDirection::Down => self.upstairs,
            StairDirection::Up => self.downstairs,
        };
        stairs.unwrap_or(self.entry)
    }
}

/// Serves authored floors by depth. Depths past the last floor repeat it.
///
/// Every visit yields fresh copies, so revisited floors are repopulated.
#[derive(Clone, Debug)]
pub struct PresetFloors {
    first: PresetFloor,
    rest: Vec<PresetFloor>,
}

impl PresetFloors {
    pub fn new(first: PresetFloor, rest: Vec<PresetFloor>) -> Self {
        Self { first, rest }
    }

    /// Number of authored floors.
    pub fn depth_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Floor for a 1-based depth.
    pub fn floor(&self, depth: u32) -> &PresetFloor {
        if depth <= 1 {
            return &self.first;
        }
        let index = (depth - 2) as usize;
        self.rest
            .get(index)
            .or(self.rest.last())
            .unwrap_or(&self.first)
    }
}

impl FloorGenerator for PresetFloors {
    type Map = StaticMap;

    fn generate_floor(
        &mut self,
        direction: StairDirection,
        state: &GameState,
    ) -> GeneratedFloor<StaticMap> {
        let depth = match direction {
            StairDirection::Down => state.floor.depth.saturating_add(1),
            StairDirection::Up => state.floor.depth.saturating_sub(1).max(1),
        };
        let floor = self.floor(depth);

        GeneratedFloor {
            map: floor.map.clone(),
            depth,
            downstairs: floor.downstairs,
            upstairs: floor.upstairs,
            player_position: floor.arrival(direction),
            npcs: floor.npcs.clone(),
            items: floor.items.clone(),
        }
    }
}
