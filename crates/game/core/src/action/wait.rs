use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible};
use crate::config::GameConfig;
use crate::env::WorldView;
use crate::state::EntityId;

/// Skip the turn and catch one's breath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Plan = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, view: &WorldView<'_>, _config: &GameConfig) -> Result<(), Impossible> {
        living_actor(view, self.actor)?;
        Ok(())
    }

    fn apply(&self, _plan: (), ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let regen = ctx.config.combat.stamina_regen;
        if let Some(actor) = ctx.actor_mut(self.actor) {
            actor.fighter.restore_stam(regen);
        }
        ActionOutcome::Waited
    }
}
