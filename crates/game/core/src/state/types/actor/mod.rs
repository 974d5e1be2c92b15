//! Actor-related state types.
//!
//! This module contains all types specific to actors:
//! - ActorState: Main actor structure
//! - Fighter: Hit point / stamina pools and stance
//! - Equipment: Worn and wielded items
//! - Inventory: Item storage for actors

pub mod equipment;
pub mod fighter;
pub mod inventory;

pub use equipment::{EquipChange, Equipment};
pub use fighter::{Fighter, Grip, Guard, Stance};
pub use inventory::InventoryState;

use super::{EntityId, Position, RenderOrder, Rgb};

/// Glyph drawn for a corpse.
pub const CORPSE_GLYPH: char = '%';
/// Color drawn for a corpse.
pub const CORPSE_COLOR: Rgb = Rgb(191, 0, 0);

/// Decision policy attached to a living actor.
///
/// Presence of a policy marks the actor as alive and able to take part in
/// combat; the death transition clears it for good.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiPolicy {
    /// Driven by external input.
    Player,
    /// Driven by an action provider that attacks on sight.
    Hostile,
}

/// Experience bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub current_xp: u32,
    /// Experience awarded to the player when this actor dies.
    pub xp_given: u32,
}

impl Level {
    pub fn new(xp_given: u32) -> Self {
        Self {
            current_xp: 0,
            xp_given,
        }
    }

    pub fn add_xp(&mut self, amount: u32) {
        self.current_xp = self.current_xp.saturating_add(amount);
    }
}

/// Facts captured at the moment an actor dies, before it became a corpse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathReport {
    pub entity: EntityId,
    /// Name the actor had while alive.
    pub name: String,
    pub xp_given: u32,
}

/// Complete actor state.
///
/// # Invariants
///
/// - `ai.is_some()` exactly while the actor is alive
/// - Hit points only decrease through [`ActorState::apply_damage`], which owns
///   the death check
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub position: Position,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,

    pub fighter: Fighter,
    pub inventory: Option<InventoryState>,
    pub equipment: Option<Equipment>,
    pub ai: Option<AiPolicy>,
    pub level: Level,
}

impl ActorState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, fighter: Fighter) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: '@',
            color: Rgb(255, 255, 255),
            position,
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            fighter,
            inventory: None,
            equipment: None,
            ai: Some(AiPolicy::Hostile),
            level: Level::default(),
        }
    }

    pub fn with_appearance(mut self, glyph: char, color: Rgb) -> Self {
        self.glyph = glyph;
        self.color = color;
        self
    }

    pub fn with_ai(mut self, ai: Option<AiPolicy>) -> Self {
        self.ai = ai;
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = Some(equipment);
        self
    }

    pub fn with_xp_given(mut self, xp_given: u32) -> Self {
        self.level.xp_given = xp_given;
        self
    }

    /// Alive means an AI policy is attached.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    pub fn power_bonus(&self) -> i32 {
        match (&self.equipment, &self.inventory) {
            (Some(equipment), Some(inventory)) => equipment.power_bonus(inventory),
            _ => 0,
        }
    }

    pub fn defense_bonus(&self) -> i32 {
        match (&self.equipment, &self.inventory) {
            (Some(equipment), Some(inventory)) => equipment.defense_bonus(inventory),
            _ => 0,
        }
    }

    /// Base power plus equipment bonus.
    pub fn power(&self) -> i32 {
        self.fighter.base_power + self.power_bonus()
    }

    /// Base defense plus equipment bonus.
    pub fn defense(&self) -> i32 {
        self.fighter.base_defense + self.defense_bonus()
    }

    pub fn item_is_equipped(&self, item: EntityId) -> bool {
        self.equipment
            .as_ref()
            .is_some_and(|equipment| equipment.item_is_equipped(item))
    }

    /// Applies damage and runs the death check.
    ///
    /// Returns a report when this call killed the actor. Damage on an actor
    /// without an AI policy (already dead) never reports a second death.
    pub fn apply_damage(&mut self, amount: u32) -> Option<DeathReport> {
        self.fighter.take_damage(amount);
        if self.fighter.hp() == 0 && self.ai.is_some() {
            return Some(self.die());
        }
        None
    }

    /// Heals and returns the amount recovered.
    pub fn apply_healing(&mut self, amount: u32) -> u32 {
        self.fighter.heal(amount)
    }

    /// One-way transition into an inert corpse.
    fn die(&mut self) -> DeathReport {
        let report = DeathReport {
            entity: self.id,
            name: self.name.clone(),
            xp_given: self.level.xp_given,
        };

        self.glyph = CORPSE_GLYPH;
        self.color = CORPSE_COLOR;
        self.blocks_movement = false;
        self.ai = None;
        self.name = format!("remains of {}", self.name);
        self.render_order = RenderOrder::Corpse;

        report
    }
}
