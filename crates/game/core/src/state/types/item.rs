//! Item-related state types.
//!
//! Items are entities in their own right: they sit on the floor with a
//! position, or inside an actor's inventory (position is then stale and
//! rewritten when the item is dropped).

use super::{EntityId, Position, RenderOrder, Rgb};

/// An item, either lying on the floor or carried in an inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub position: Position,
    pub kind: ItemKind,
}

impl ItemState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: '!',
            color: Rgb(255, 255, 255),
            position,
            kind,
        }
    }

    pub fn with_appearance(mut self, glyph: char, color: Rgb) -> Self {
        self.glyph = glyph;
        self.color = color;
        self
    }

    pub fn render_order(&self) -> RenderOrder {
        RenderOrder::Item
    }

    /// Returns the consumable effect, if this item can be used up.
    pub fn consumable(&self) -> Option<ConsumableEffect> {
        match self.kind {
            ItemKind::Consumable(effect) => Some(effect),
            ItemKind::Equippable(_) => None,
        }
    }

    /// Returns the equipment data, if this item can be worn or wielded.
    pub fn equippable(&self) -> Option<EquippableData> {
        match self.kind {
            ItemKind::Equippable(data) => Some(data),
            ItemKind::Consumable(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Consumable(ConsumableEffect),
    Equippable(EquippableData),
}

/// What happens when a consumable is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restores hit points to the user.
    Healing { amount: u32 },
    /// Strikes the actor standing on the target tile.
    Bolt { damage: u32 },
}

/// Stat bonuses granted while the item is equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippableData {
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: i32,
}

impl EquippableData {
    pub fn new(slot: EquipmentSlot, power_bonus: i32, defense_bonus: i32) -> Self {
        Self {
            slot,
            power_bonus,
            defense_bonus,
        }
    }
}

/// Body slot an equippable item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Shield,
    Necklace,
    Ring,
}
