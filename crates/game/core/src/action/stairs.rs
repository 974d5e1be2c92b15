use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible, ImpossibleReason};
use crate::config::GameConfig;
use crate::env::WorldView;
use crate::log::MessageStyle;
use crate::state::{EntityId, StairDirection};

/// Take the staircase under the actor.
///
/// Only announces the move; the scheduler swaps in the next floor when it
/// sees [`ActionOutcome::TookStairs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl ActionTransition for TakeStairsAction {
    type Plan = StairDirection;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        _config: &GameConfig,
    ) -> Result<StairDirection, Impossible> {
        let actor = living_actor(view, self.actor)?;
        view.state
            .floor
            .stairs_at(actor.position)
            .ok_or_else(|| ImpossibleReason::NoStairs.into())
    }

    fn apply(&self, direction: StairDirection, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let text = match direction {
            StairDirection::Down => "You descend the staircase.",
            StairDirection::Up => "You ascend the staircase.",
        };
        ctx.log(text, MessageStyle::Descend);
        ActionOutcome::TookStairs(direction)
    }
}
