//! Results of successfully performed actions.

use crate::combat::MeleeResolution;
use crate::state::{ConsumableEffect, EntityId, EquipChange, Position, Stance, StairDirection};

/// What a turn-consuming action did.
///
/// Soft outcomes (an exhausted swing, a failed dodge, an evaded attack or
/// item) still consume the turn; they are values here, never errors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Waited,
    Moved {
        from: Position,
        to: Position,
    },
    Attacked {
        target: EntityId,
        resolution: MeleeResolution,
    },
    Dodged {
        to: Position,
    },
    /// Not enough stamina to dodge; nothing moved.
    DodgeFailed,
    PickedUp {
        item: EntityId,
    },
    Equipped(EquipChange),
    Dropped {
        item: EntityId,
        at: Position,
    },
    /// A consumable was used up. `amount` is the HP healed or damage dealt.
    ItemUsed {
        item: EntityId,
        effect: ConsumableEffect,
        amount: u32,
    },
    /// The target evaded; the item was not consumed.
    ItemEvaded {
        item: EntityId,
        target: EntityId,
    },
    StanceChanged(Stance),
    TookStairs(StairDirection),
}

impl ActionOutcome {
    /// True for outcomes that spent the turn without affecting anyone.
    pub fn is_soft(&self) -> bool {
        match self {
            Self::DodgeFailed | Self::ItemEvaded { .. } => true,
            Self::Attacked { resolution, .. } => !matches!(resolution, MeleeResolution::Hit { .. }),
            _ => false,
        }
    }
}
