//! Inventory system for actors.
//!
//! An ordered list of carried items with a per-actor capacity.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::types::{EntityId, ItemState};

/// Carried items. Deserialization caps the capacity and rejects an
/// inventory holding more items than it has room for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "InventoryRecord"))]
pub struct InventoryState {
    pub items: ArrayVec<ItemState, { GameConfig::MAX_INVENTORY_SLOTS }>,
    capacity: usize,
}

impl InventoryState {
    /// Creates an empty inventory. Capacity is capped at
    /// [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: ArrayVec::new(),
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn item(&self, id: EntityId) -> Option<&ItemState> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.item(id).is_some()
    }

    /// Appends an item, handing it back when there is no room.
    pub fn add(&mut self, item: ItemState) -> Result<(), ItemState> {
        if self.is_full() {
            return Err(item);
        }
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes an item while keeping the order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::with_capacity(GameConfig::MAX_INVENTORY_SLOTS)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct InventoryRecord {
    items: ArrayVec<ItemState, { GameConfig::MAX_INVENTORY_SLOTS }>,
    capacity: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<InventoryRecord> for InventoryState {
    type Error = String;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        let mut inventory = Self::with_capacity(record.capacity);
        if record.items.len() > inventory.capacity {
            return Err(format!(
                "inventory holds {} items but has room for {}",
                record.items.len(),
                inventory.capacity
            ));
        }
        inventory.items = record.items;
        Ok(inventory)
    }
}
