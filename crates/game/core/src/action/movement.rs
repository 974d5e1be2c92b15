use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible, ImpossibleReason};
use crate::config::GameConfig;
use crate::env::{SpatialQuery, WorldView};
use crate::state::{Displacement, EntityId, Position};

/// Step one tile by `displacement`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub displacement: Displacement,
}

impl MoveAction {
    pub fn new(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self {
            actor,
            displacement: displacement.into(),
        }
    }
}

/// Source and destination resolved during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePlan {
    pub from: Position,
    pub to: Position,
}

impl ActionTransition for MoveAction {
    type Plan = MovePlan;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        _config: &GameConfig,
    ) -> Result<MovePlan, Impossible> {
        let actor = living_actor(view, self.actor)?;
        let from = actor.position;
        let to = from.offset(self.displacement);

        // Every failure reads the same to the player.
        if !view.in_bounds(to) || !view.walkable(to) || view.blocking_entity_at(to).is_some() {
            return Err(ImpossibleReason::Blocked.into());
        }

        Ok(MovePlan { from, to })
    }

    fn apply(&self, plan: MovePlan, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let regen = ctx.config.combat.stamina_regen;
        if let Some(actor) = ctx.actor_mut(self.actor) {
            actor.position = plan.to;
            actor.fighter.restore_stam(regen);
        }
        ActionOutcome::Moved {
            from: plan.from,
            to: plan.to,
        }
    }
}
