//! Equipment system for actors.
//!
//! Equipment references carried items by id, one per body slot. Item data
//! (name, bonuses) stays in the inventory, so bonus queries take the
//! inventory the handles point into.

use strum::IntoEnumIterator;

use crate::state::types::{EntityId, EquipmentSlot, InventoryState, ItemState};

/// Equipment state for an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<EntityId>,
    pub armor: Option<EntityId>,
    pub shield: Option<EntityId>,
    pub necklace: Option<EntityId>,
    pub ring: Option<EntityId>,
}

/// Result of toggling an item in or out of its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipChange {
    Equipped {
        item: EntityId,
        /// Item that previously occupied the slot and was taken off.
        replaced: Option<EntityId>,
    },
    Unequipped {
        item: EntityId,
    },
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Shield => self.shield,
            EquipmentSlot::Necklace => self.necklace,
            EquipmentSlot::Ring => self.ring,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Necklace => &mut self.necklace,
            EquipmentSlot::Ring => &mut self.ring,
        }
    }

    /// Iterates the ids of every equipped item.
    pub fn equipped(&self) -> impl Iterator<Item = EntityId> + '_ {
        EquipmentSlot::iter().filter_map(|slot| self.slot(slot))
    }

    pub fn item_is_equipped(&self, item: EntityId) -> bool {
        self.equipped().any(|id| id == item)
    }

    /// Puts `item` on, or takes it off when it is already worn.
    ///
    /// Returns `None` when the item is not equippable.
    pub fn toggle_equip(&mut self, item: &ItemState) -> Option<EquipChange> {
        let data = item.equippable()?;
        let slot = self.slot_mut(data.slot);
        if *slot == Some(item.id) {
            *slot = None;
            return Some(EquipChange::Unequipped { item: item.id });
        }
        let replaced = slot.replace(item.id);
        Some(EquipChange::Equipped {
            item: item.id,
            replaced,
        })
    }

    /// Clears whichever slot holds `item`; returns whether anything changed.
    pub fn unequip(&mut self, item: EntityId) -> bool {
        for slot in EquipmentSlot::iter() {
            let held = self.slot_mut(slot);
            if *held == Some(item) {
                *held = None;
                return true;
            }
        }
        false
    }

    pub fn power_bonus(&self, inventory: &InventoryState) -> i32 {
        self.sum_bonus(inventory, |data| data.power_bonus)
    }

    pub fn defense_bonus(&self, inventory: &InventoryState) -> i32 {
        self.sum_bonus(inventory, |data| data.defense_bonus)
    }

    fn sum_bonus(
        &self,
        inventory: &InventoryState,
        pick: impl Fn(&crate::state::types::EquippableData) -> i32,
    ) -> i32 {
        self.equipped()
            .filter_map(|id| inventory.item(id))
            .filter_map(ItemState::equippable)
            .map(|data| pick(&data))
            .sum()
    }
}
