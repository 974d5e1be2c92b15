//! Actor and item templates.
//!
//! Templates are catalog entries keyed by a string id. Spawning one produces a
//! fresh [`ActorState`] or [`ItemState`] for the given entity id and tile.

use delve_core::{
    ActorState, AiPolicy, EntityId, Equipment, Fighter, InventoryState, ItemKind, ItemState,
    Position, Rgb,
};

/// Blueprint for a player or monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub id: String,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub max_hp: u32,
    pub max_stam: u32,
    pub defense: i32,
    pub power: i32,
    pub stam_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_given: u32,
    /// Zero means the actor carries nothing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory_capacity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: bool,
}

impl ActorTemplate {
    pub fn spawn(&self, id: EntityId, position: Position, ai: AiPolicy) -> ActorState {
        let fighter = Fighter::new(
            self.max_hp,
            self.max_stam,
            self.defense,
            self.power,
            self.stam_cost,
        );
        let mut actor = ActorState::new(id, self.name.clone(), position, fighter)
            .with_appearance(self.glyph, self.color)
            .with_ai(Some(ai))
            .with_xp_given(self.xp_given);
        if self.inventory_capacity > 0 {
            actor = actor.with_inventory(InventoryState::with_capacity(self.inventory_capacity));
        }
        if self.equipment {
            actor = actor.with_equipment(Equipment::empty());
        }
        actor
    }
}

/// Blueprint for a floor item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub kind: ItemKind,
}

impl ItemTemplate {
    pub fn spawn(&self, id: EntityId, position: Position) -> ItemState {
        ItemState::new(id, self.name.clone(), position, self.kind)
            .with_appearance(self.glyph, self.color)
    }
}

/// Id-keyed template lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog<T> {
    pub entries: Vec<T>,
}

pub type ActorCatalog = Catalog<ActorTemplate>;
pub type ItemCatalog = Catalog<ItemTemplate>;

impl<T> Catalog<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ActorCatalog {
    pub fn get(&self, id: &str) -> Option<&ActorTemplate> {
        self.entries.iter().find(|template| template.id == id)
    }
}

impl ItemCatalog {
    pub fn get(&self, id: &str) -> Option<&ItemTemplate> {
        self.entries.iter().find(|template| template.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::ConsumableEffect;

    fn orc() -> ActorTemplate {
        ActorTemplate {
            id: "orc".into(),
            name: "Orc".into(),
            glyph: 'o',
            color: Rgb(63, 127, 63),
            max_hp: 10,
            max_stam: 6,
            defense: 0,
            power: 3,
            stam_cost: 2,
            xp_given: 35,
            inventory_capacity: 0,
            equipment: false,
        }
    }

    #[test]
    fn spawned_actor_starts_full_and_alive() {
        let actor = orc().spawn(EntityId(3), Position::new(4, 5), AiPolicy::Hostile);

        assert_eq!(actor.id, EntityId(3));
        assert_eq!(actor.glyph, 'o');
        assert_eq!(actor.fighter.hp(), 10);
        assert_eq!(actor.fighter.stam(), 6);
        assert_eq!(actor.level.xp_given, 35);
        assert!(actor.is_alive());
        assert!(actor.inventory.is_none());
        assert!(actor.equipment.is_none());
    }

    #[test]
    fn catalog_lookup_by_id() {
        let items = ItemCatalog::new(vec![ItemTemplate {
            id: "health_potion".into(),
            name: "Health Potion".into(),
            glyph: '!',
            color: Rgb(127, 0, 255),
            kind: ItemKind::Consumable(ConsumableEffect::Healing { amount: 4 }),
        }]);

        let potion = items.get("health_potion").unwrap().spawn(EntityId(9), Position::ORIGIN);
        assert_eq!(potion.name, "Health Potion");
        assert!(items.get("scroll").is_none());
    }
}
