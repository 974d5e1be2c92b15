use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible};
use crate::config::GameConfig;
use crate::env::WorldView;
use crate::state::EntityId;

/// Switch between one- and two-handed grip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleTwoHandAction {
    pub actor: EntityId,
}

/// Raise or lower the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleBlockAction {
    pub actor: EntityId,
}

impl ActionTransition for ToggleTwoHandAction {
    type Plan = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, view: &WorldView<'_>, _config: &GameConfig) -> Result<(), Impossible> {
        living_actor(view, self.actor)?;
        Ok(())
    }

    fn apply(&self, _plan: (), ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let stance = ctx
            .actor_mut(self.actor)
            .map(|actor| {
                actor.fighter.stance.toggle_grip();
                actor.fighter.stance
            })
            .unwrap_or_default();
        ActionOutcome::StanceChanged(stance)
    }
}

impl ActionTransition for ToggleBlockAction {
    type Plan = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, view: &WorldView<'_>, _config: &GameConfig) -> Result<(), Impossible> {
        living_actor(view, self.actor)?;
        Ok(())
    }

    fn apply(&self, _plan: (), ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let stance = ctx
            .actor_mut(self.actor)
            .map(|actor| {
                actor.fighter.stance.toggle_block();
                actor.fighter.stance
            })
            .unwrap_or_default();
        ActionOutcome::StanceChanged(stance)
    }
}
