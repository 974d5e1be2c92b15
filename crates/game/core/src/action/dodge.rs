use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible, ImpossibleReason};
use crate::config::GameConfig;
use crate::env::{SpatialQuery, WorldView};
use crate::log::{MessageStyle, capitalize};
use crate::state::{Displacement, EntityId, Position};

/// Leap aside, toggling evasion.
///
/// A dodge into an occupied tile vaults over the occupant and lands two
/// tiles away when that tile is free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DodgeAction {
    pub actor: EntityId,
    pub displacement: Displacement,
}

impl DodgeAction {
    pub fn new(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self {
            actor,
            displacement: displacement.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DodgePlan {
    /// Too winded to dodge; the turn is spent anyway.
    Winded { name: String },
    Leap { name: String, to: Position },
}

impl ActionTransition for DodgeAction {
    type Plan = DodgePlan;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        config: &GameConfig,
    ) -> Result<DodgePlan, Impossible> {
        let actor = living_actor(view, self.actor)?;
        let name = actor.name.clone();
        if actor.fighter.stam() < config.combat.dodge_stamina_cost {
            return Ok(DodgePlan::Winded { name });
        }

        let destination = actor.position.offset(self.displacement);
        if !view.in_bounds(destination) {
            return Err(ImpossibleReason::BlockedByMapEdge.into());
        }
        if !view.walkable(destination) {
            return Err(ImpossibleReason::BlockedByWall.into());
        }

        let to = if view.blocking_entity_at(destination).is_some() {
            let vault = actor.position.offset(self.displacement.scaled(2));
            if !view.can_enter(vault) {
                return Err(ImpossibleReason::BlockedByCharacter.into());
            }
            vault
        } else {
            destination
        };

        Ok(DodgePlan::Leap { name, to })
    }

    fn apply(&self, plan: DodgePlan, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        match plan {
            DodgePlan::Winded { name } => {
                ctx.log(
                    format!("{} dives out of the way but fails", capitalize(&name)),
                    MessageStyle::Neutral,
                );
                ActionOutcome::DodgeFailed
            }
            DodgePlan::Leap { name, to } => {
                let cost = ctx.config.combat.dodge_stamina_cost;
                ctx.log(format!("{} dodges!", capitalize(&name)), MessageStyle::Neutral);
                if let Some(actor) = ctx.actor_mut(self.actor) {
                    actor.fighter.stance.toggle_evasion();
                    actor.position = to;
                    actor.fighter.take_stam(cost);
                }
                ActionOutcome::Dodged { to }
            }
        }
    }
}
