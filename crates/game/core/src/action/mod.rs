//! Action domain.
//!
//! Every intent an actor can express is a variant of the closed [`Action`]
//! enum, and every variant implements [`ActionTransition`]: a read-only
//! `pre_validate` that either rejects the action with [`Impossible`] or
//! resolves a plan, followed by an infallible `apply`.
//!
//! # Module Structure
//!
//! - `error`: rejection reasons (`Impossible`, `ImpossibleReason`)
//! - `types`: `ActionOutcome`, what a performed action did
//! - `context`: `ActionContext`, the mutable surroundings of `apply`
//! - `transition`: the validate/apply contract and its driver
//! - one module per action family (movement, combat, dodge, bump, inventory,
//!   item, stance, stairs, wait)

pub mod bump;
pub mod combat;
pub mod context;
pub mod dodge;
pub mod error;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod stance;
pub mod stairs;
pub mod transition;
pub mod types;
pub mod wait;

pub use bump::{BumpAction, BumpPlan};
pub use combat::{MeleeAction, MeleePlan};
pub use context::ActionContext;
pub use dodge::{DodgeAction, DodgePlan};
pub use error::{Impossible, ImpossibleReason};
pub use inventory::{DropAction, EquipAction, PickupAction};
pub use item::{UseItemAction, UseItemPlan};
pub use movement::{MoveAction, MovePlan};
pub use stance::{ToggleBlockAction, ToggleTwoHandAction};
pub use stairs::TakeStairsAction;
pub use transition::{ActionTransition, drive_transition};
pub use types::ActionOutcome;
pub use wait::WaitAction;

pub use crate::combat::AttackStyle;

use crate::state::{Displacement, EntityId, Position};

/// A single intent bound to the entity performing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Wait(WaitAction),
    Pickup(PickupAction),
    Equip(EquipAction),
    Drop(DropAction),
    UseItem(UseItemAction),
    ToggleTwoHand(ToggleTwoHandAction),
    ToggleBlock(ToggleBlockAction),
    TakeStairs(TakeStairsAction),
    Move(MoveAction),
    Melee(MeleeAction),
    Dodge(DodgeAction),
    Bump(BumpAction),
}

impl Action {
    pub fn wait(actor: EntityId) -> Self {
        Self::Wait(WaitAction::new(actor))
    }

    pub fn pickup(actor: EntityId) -> Self {
        Self::Pickup(PickupAction { actor })
    }

    pub fn equip(actor: EntityId, item: EntityId) -> Self {
        Self::Equip(EquipAction { actor, item })
    }

    pub fn drop_item(actor: EntityId, item: EntityId) -> Self {
        Self::Drop(DropAction { actor, item })
    }

    pub fn use_item(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self::UseItem(UseItemAction {
            actor,
            item,
            target,
        })
    }

    pub fn toggle_two_hand(actor: EntityId) -> Self {
        Self::ToggleTwoHand(ToggleTwoHandAction { actor })
    }

    pub fn toggle_block(actor: EntityId) -> Self {
        Self::ToggleBlock(ToggleBlockAction { actor })
    }

    pub fn take_stairs(actor: EntityId) -> Self {
        Self::TakeStairs(TakeStairsAction { actor })
    }

    pub fn movement(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self::Move(MoveAction::new(actor, displacement))
    }

    pub fn melee(actor: EntityId, displacement: impl Into<Displacement>, style: AttackStyle) -> Self {
        Self::Melee(MeleeAction::new(actor, displacement, style))
    }

    pub fn dodge(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self::Dodge(DodgeAction::new(actor, displacement))
    }

    pub fn bump(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self::Bump(BumpAction::new(actor, displacement))
    }

    /// The entity performing the action.
    pub fn actor(&self) -> EntityId {
        match self {
            Self::Wait(action) => action.actor(),
            Self::Pickup(action) => action.actor(),
            Self::Equip(action) => action.actor(),
            Self::Drop(action) => action.actor(),
            Self::UseItem(action) => action.actor(),
            Self::ToggleTwoHand(action) => action.actor(),
            Self::ToggleBlock(action) => action.actor(),
            Self::TakeStairs(action) => action.actor(),
            Self::Move(action) => action.actor(),
            Self::Melee(action) => action.actor(),
            Self::Dodge(action) => action.actor(),
            Self::Bump(action) => action.actor(),
        }
    }

    /// Stable snake_case name of the variant, for logs.
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }

    /// Validates and applies the action.
    ///
    /// On `Err` the state is exactly as it was before the call.
    pub fn perform(&self, ctx: &mut ActionContext<'_>) -> Result<ActionOutcome, Impossible> {
        match self {
            Self::Wait(action) => drive_transition(action, ctx),
            Self::Pickup(action) => drive_transition(action, ctx),
            Self::Equip(action) => drive_transition(action, ctx),
            Self::Drop(action) => drive_transition(action, ctx),
            Self::UseItem(action) => drive_transition(action, ctx),
            Self::ToggleTwoHand(action) => drive_transition(action, ctx),
            Self::ToggleBlock(action) => drive_transition(action, ctx),
            Self::TakeStairs(action) => drive_transition(action, ctx),
            Self::Move(action) => drive_transition(action, ctx),
            Self::Melee(action) => drive_transition(action, ctx),
            Self::Dodge(action) => drive_transition(action, ctx),
            Self::Bump(action) => drive_transition(action, ctx),
        }
    }
}
