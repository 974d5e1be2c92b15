use crate::action::transition::living_actor;
use crate::action::{
    ActionContext, ActionOutcome, ActionTransition, Impossible, MeleeAction, MeleePlan, MoveAction,
    MovePlan,
};
use crate::config::GameConfig;
use crate::env::{SpatialQuery, WorldView};
use crate::state::{Displacement, EntityId};

/// Directional intent: attack whoever is there, otherwise walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub displacement: Displacement,
}

impl BumpAction {
    pub fn new(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self {
            actor,
            displacement: displacement.into(),
        }
    }

    fn melee(&self) -> MeleeAction {
        MeleeAction::light(self.actor, self.displacement)
    }

    fn movement(&self) -> MoveAction {
        MoveAction::new(self.actor, self.displacement)
    }
}

/// The delegate chosen by occupancy, with its own resolved plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BumpPlan {
    Melee(MeleePlan),
    Move(MovePlan),
}

impl ActionTransition for BumpAction {
    type Plan = BumpPlan;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        config: &GameConfig,
    ) -> Result<BumpPlan, Impossible> {
        let actor = living_actor(view, self.actor)?;
        let destination = actor.position.offset(self.displacement);

        if view.actor_at(destination).is_some() {
            self.melee().pre_validate(view, config).map(BumpPlan::Melee)
        } else {
            self.movement().pre_validate(view, config).map(BumpPlan::Move)
        }
    }

    fn apply(&self, plan: BumpPlan, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        match plan {
            BumpPlan::Melee(plan) => self.melee().apply(plan, ctx),
            BumpPlan::Move(plan) => self.movement().apply(plan, ctx),
        }
    }
}
