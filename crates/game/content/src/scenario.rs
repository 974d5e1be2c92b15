//! Scenario definitions: starting floors, spawns and a scripted command list.

use delve_core::{Action, AttackStyle, CardinalDirection, EntityId, GameState, Position};

/// A template placed on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub template: String,
    pub position: Position,
}

/// One floor of a scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorSpec {
    /// Map file name under `maps/`, without extension.
    pub map: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub downstairs: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upstairs: Option<Position>,
    /// Arrival tile when neither staircase applies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub arrival: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npcs: Vec<Placement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Placement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub template: String,
    pub position: Position,
    /// Item templates the player starts with, in inventory order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub carried: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub player: PlayerSpec,
    /// Floors by depth; the first is where play starts.
    pub floors: Vec<FloorSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub script: Vec<PlayerCommand>,
}

/// Player input as written in scenario scripts.
///
/// Item commands name an inventory slot by index, the way a menu would.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    Wait,
    Pickup,
    Equip(usize),
    Drop(usize),
    Use(usize, Option<Position>),
    ToggleTwoHand,
    ToggleBlock,
    TakeStairs,
    Move(CardinalDirection),
    Bump(CardinalDirection),
    Melee(CardinalDirection),
    Heavy(CardinalDirection),
    Dodge(CardinalDirection),
}

impl PlayerCommand {
    /// Binds the command to the player.
    ///
    /// Returns `None` when an item command names an empty slot.
    pub fn to_action(&self, state: &GameState) -> Option<Action> {
        let player = EntityId::PLAYER;
        let slot = |index: usize| -> Option<EntityId> {
            state
                .player()
                .inventory
                .as_ref()?
                .items
                .get(index)
                .map(|item| item.id)
        };

        let action = match *self {
            Self::Wait => Action::wait(player),
            Self::Pickup => Action::pickup(player),
            Self::Equip(index) => Action::equip(player, slot(index)?),
            Self::Drop(index) => Action::drop_item(player, slot(index)?),
            Self::Use(index, target) => Action::use_item(player, slot(index)?, target),
            Self::ToggleTwoHand => Action::toggle_two_hand(player),
            Self::ToggleBlock => Action::toggle_block(player),
            Self::TakeStairs => Action::take_stairs(player),
            Self::Move(direction) => Action::movement(player, direction),
            Self::Bump(direction) => Action::bump(player, direction),
            Self::Melee(direction) => Action::melee(player, direction, AttackStyle::Light),
            Self::Heavy(direction) => Action::melee(player, direction, AttackStyle::Heavy),
            Self::Dodge(direction) => Action::dodge(player, direction),
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{
        ActorState, AiPolicy, ConsumableEffect, Fighter, InventoryState, ItemKind, ItemState,
    };

    fn state() -> GameState {
        let mut inventory = InventoryState::with_capacity(4);
        inventory
            .add(ItemState::new(
                EntityId(12),
                "Health Potion",
                Position::ORIGIN,
                ItemKind::Consumable(ConsumableEffect::Healing { amount: 4 }),
            ))
            .unwrap();
        let player = ActorState::new(EntityId::PLAYER, "Player", Position::new(1, 1), Fighter::new(30, 10, 2, 5, 2))
            .with_ai(Some(AiPolicy::Player))
            .with_inventory(inventory);
        GameState::with_player(player)
    }

    #[test]
    fn item_commands_resolve_inventory_slots() {
        let state = state();

        assert_eq!(
            PlayerCommand::Use(0, None).to_action(&state),
            Some(Action::use_item(EntityId::PLAYER, EntityId(12), None))
        );
        assert_eq!(PlayerCommand::Drop(1).to_action(&state), None);
    }

    #[test]
    fn heavy_command_is_heavy_melee() {
        let state = state();
        assert_eq!(
            PlayerCommand::Heavy(CardinalDirection::North).to_action(&state),
            Some(Action::melee(
                EntityId::PLAYER,
                CardinalDirection::North,
                AttackStyle::Heavy
            ))
        );
    }
}
