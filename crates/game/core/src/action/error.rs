//! Action rejection.
//!
//! An action either passes validation and consumes the turn, or is rejected
//! with [`Impossible`] before any state is touched. The reason's `Display`
//! text is the line shown to the player.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Why an action could not be performed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpossibleReason {
    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("That way is blocked.")]
    Blocked,

    #[error("That way is blocked by the world map.")]
    BlockedByMapEdge,

    #[error("That way is blocked by a wall.")]
    BlockedByWall,

    #[error("That way is blocked by a character.")]
    BlockedByCharacter,

    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("There are no stairs here.")]
    NoStairs,

    #[error("Your health is already full.")]
    HealthFull,

    #[error("You must select an enemy to target.")]
    NoTarget,

    #[error("You cannot target yourself!")]
    TargetSelf,

    #[error("You cannot use that.")]
    NotConsumable,

    #[error("You cannot equip that.")]
    NotEquippable,

    #[error("You are not carrying that.")]
    ItemNotCarried,

    #[error("You have nowhere to carry that.")]
    NoInventory,

    /// The acting entity does not exist on this floor.
    #[error("Actor {0} is not present.")]
    ActorMissing(EntityId),

    /// The acting entity is a corpse.
    #[error("Actor {0} can no longer act.")]
    ActorDead(EntityId),
}

/// Rejection of an action. Guarantees that no state was mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{reason}")]
pub struct Impossible {
    pub reason: ImpossibleReason,
}

impl Impossible {
    pub fn new(reason: ImpossibleReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> &ImpossibleReason {
        &self.reason
    }
}

impl From<ImpossibleReason> for Impossible {
    fn from(reason: ImpossibleReason) -> Self {
        Self::new(reason)
    }
}

impl GameError for Impossible {
    fn severity(&self) -> ErrorSeverity {
        use ImpossibleReason::*;
        match self.reason {
            ActorMissing(_) => ErrorSeverity::Internal,
            ActorDead(_) => ErrorSeverity::Validation,
            NotConsumable | NotEquippable | ItemNotCarried | NoInventory => {
                ErrorSeverity::Validation
            }
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ImpossibleReason::*;
        match self.reason {
            NothingToAttack => "IMPOSSIBLE_NOTHING_TO_ATTACK",
            Blocked => "IMPOSSIBLE_BLOCKED",
            BlockedByMapEdge => "IMPOSSIBLE_BLOCKED_BY_MAP_EDGE",
            BlockedByWall => "IMPOSSIBLE_BLOCKED_BY_WALL",
            BlockedByCharacter => "IMPOSSIBLE_BLOCKED_BY_CHARACTER",
            InventoryFull => "IMPOSSIBLE_INVENTORY_FULL",
            NothingToPickUp => "IMPOSSIBLE_NOTHING_TO_PICK_UP",
            NoStairs => "IMPOSSIBLE_NO_STAIRS",
            HealthFull => "IMPOSSIBLE_HEALTH_FULL",
            NoTarget => "IMPOSSIBLE_NO_TARGET",
            TargetSelf => "IMPOSSIBLE_TARGET_SELF",
            NotConsumable => "IMPOSSIBLE_NOT_CONSUMABLE",
            NotEquippable => "IMPOSSIBLE_NOT_EQUIPPABLE",
            ItemNotCarried => "IMPOSSIBLE_ITEM_NOT_CARRIED",
            NoInventory => "IMPOSSIBLE_NO_INVENTORY",
            ActorMissing(_) => "IMPOSSIBLE_ACTOR_MISSING",
            ActorDead(_) => "IMPOSSIBLE_ACTOR_DEAD",
        }
    }
}
