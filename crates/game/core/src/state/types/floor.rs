//! Per-floor runtime state layered on top of the static map.

use super::{EntityId, ItemState, Position};

/// Which way a staircase leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StairDirection {
    Down,
    Up,
}

/// Items lying on the floor and the stair locations of the active level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorState {
    /// 1-based depth of the active floor.
    pub depth: u32,
    pub items: Vec<ItemState>,
    pub downstairs: Option<Position>,
    pub upstairs: Option<Position>,
}

impl FloorState {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn with_stairs(mut self, downstairs: Option<Position>, upstairs: Option<Position>) -> Self {
        self.downstairs = downstairs;
        self.upstairs = upstairs;
        self
    }

    /// Returns the first item lying at `position`.
    pub fn item_at(&self, position: Position) -> Option<&ItemState> {
        self.items.iter().find(|item| item.position == position)
    }

    pub fn remove_item(&mut self, id: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Returns where the stairs at `position` lead, if any.
    pub fn stairs_at(&self, position: Position) -> Option<StairDirection> {
        if self.downstairs == Some(position) {
            Some(StairDirection::Down)
        } else if self.upstairs == Some(position) {
            Some(StairDirection::Up)
        } else {
            None
        }
    }
}
