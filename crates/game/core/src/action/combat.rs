//! Melee attacks.

use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible, ImpossibleReason};
use crate::combat::{AttackStyle, CombatSnapshot, MeleeResolution, resolve_melee};
use crate::config::GameConfig;
use crate::env::{SpatialQuery, WorldView};
use crate::log::{MessageStyle, capitalize};
use crate::state::{Displacement, EntityId};

/// Swing at whoever stands at the adjacent tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub displacement: Displacement,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: AttackStyle,
}

impl MeleeAction {
    pub fn new(actor: EntityId, displacement: impl Into<Displacement>, style: AttackStyle) -> Self {
        Self {
            actor,
            displacement: displacement.into(),
            style,
        }
    }

    pub fn light(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self::new(actor, displacement, AttackStyle::Light)
    }

    pub fn heavy(actor: EntityId, displacement: impl Into<Displacement>) -> Self {
        Self::new(actor, displacement, AttackStyle::Heavy)
    }
}

/// The swing, resolved against snapshots taken before any mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeleePlan {
    pub target: EntityId,
    pub resolution: MeleeResolution,
    attacker_name: String,
    target_name: String,
}

impl ActionTransition for MeleeAction {
    type Plan = MeleePlan;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        config: &GameConfig,
    ) -> Result<MeleePlan, Impossible> {
        let attacker = living_actor(view, self.actor)?;
        let destination = attacker.position.offset(self.displacement);
        let target = view
            .actor_at(destination)
            .and_then(|id| view.actor(id))
            .ok_or(ImpossibleReason::NothingToAttack)?;

        let resolution = resolve_melee(
            &CombatSnapshot::of(attacker),
            &CombatSnapshot::of(target),
            self.style,
            &config.combat,
        );

        Ok(MeleePlan {
            target: target.id,
            resolution,
            attacker_name: attacker.name.clone(),
            target_name: target.name.clone(),
        })
    }

    fn apply(&self, plan: MeleePlan, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let regen = ctx.config.combat.stamina_regen;
        let attacker_name = capitalize(&plan.attacker_name);

        match plan.resolution {
            MeleeResolution::Exhausted => {
                ctx.log(
                    format!("{attacker_name} swings, exhausted, missing the target"),
                    MessageStyle::Neutral,
                );
                if let Some(attacker) = ctx.actor_mut(self.actor) {
                    attacker.fighter.restore_stam(regen);
                }
            }
            MeleeResolution::Evaded { stamina_cost } => {
                if let Some(attacker) = ctx.actor_mut(self.actor) {
                    attacker.fighter.take_stam(stamina_cost);
                }
                ctx.log(
                    format!("{} dodges the attack!", capitalize(&plan.target_name)),
                    MessageStyle::Neutral,
                );
            }
            MeleeResolution::Hit {
                damage,
                stamina_cost,
            } => {
                if let Some(attacker) = ctx.actor_mut(self.actor) {
                    attacker.fighter.take_stam(stamina_cost);
                }
                ctx.log(
                    format!(
                        "{attacker_name} attacks {} for {damage} hit points.",
                        plan.target_name
                    ),
                    MessageStyle::attack(self.actor.is_player()),
                );
                ctx.damage_actor(plan.target, damage);
            }
            MeleeResolution::NoDamage { stamina_cost } => {
                if let Some(attacker) = ctx.actor_mut(self.actor) {
                    attacker.fighter.take_stam(stamina_cost);
                }
                ctx.log(
                    format!("{attacker_name} attacks {} but does no damage.", plan.target_name),
                    MessageStyle::attack(self.actor.is_player()),
                );
            }
        }

        ActionOutcome::Attacked {
            target: plan.target,
            resolution: plan.resolution,
        }
    }
}
