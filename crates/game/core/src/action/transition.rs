use crate::config::GameConfig;
use crate::env::WorldView;
use crate::state::{ActorState, EntityId};

use super::{ActionContext, ActionOutcome, Impossible, ImpossibleReason};

/// Defines how a concrete action variant validates and mutates game state.
///
/// Validation is read-only and resolves everything the mutation needs into a
/// `Plan`. `apply` is infallible, so a rejected action can never leave a
/// partial write behind.
pub trait ActionTransition {
    /// Facts resolved during validation and consumed by `apply`.
    type Plan;

    /// The entity performing the action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        config: &GameConfig,
    ) -> Result<Self::Plan, Impossible>;

    /// Applies the action. Assumes `pre_validate` produced `plan` against the
    /// current state.
    fn apply(&self, plan: Self::Plan, ctx: &mut ActionContext<'_>) -> ActionOutcome;
}

/// Resolves the acting actor and rejects corpses.
pub(crate) fn living_actor<'a>(
    view: &WorldView<'a>,
    id: EntityId,
) -> Result<&'a ActorState, Impossible> {
    let actor = view
        .actor(id)
        .ok_or(ImpossibleReason::ActorMissing(id))?;
    if !actor.is_alive() {
        return Err(ImpossibleReason::ActorDead(id).into());
    }
    Ok(actor)
}

/// Runs a transition through validation and application.
#[inline]
pub fn drive_transition<T>(
    transition: &T,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionOutcome, Impossible>
where
    T: ActionTransition,
{
    let plan = transition.pre_validate(&ctx.view(), ctx.config)?;
    Ok(transition.apply(plan, ctx))
}
