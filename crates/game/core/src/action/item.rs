//! Using consumables.

use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible, ImpossibleReason};
use crate::config::GameConfig;
use crate::env::{SpatialQuery, WorldView};
use crate::log::{MessageStyle, capitalize};
use crate::state::{ConsumableEffect, EntityId, Position};

/// Use a carried consumable, optionally aimed at a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    /// Aimed tile. Defaults to the actor's own position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self {
            actor,
            item,
            target: None,
        }
    }

    pub fn targeting(actor: EntityId, item: EntityId, target: Position) -> Self {
        Self {
            actor,
            item,
            target: Some(target),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UseItemPlan {
    /// The actor on the aimed tile is evading; the item is kept.
    Evaded { target: EntityId, target_name: String },
    Heal { amount: u32, item_name: String },
    Bolt {
        target: EntityId,
        damage: u32,
        target_name: String,
    },
}

impl ActionTransition for UseItemAction {
    type Plan = UseItemPlan;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        _config: &GameConfig,
    ) -> Result<UseItemPlan, Impossible> {
        let actor = living_actor(view, self.actor)?;
        let item = actor
            .inventory
            .as_ref()
            .ok_or(ImpossibleReason::NoInventory)?
            .item(self.item)
            .ok_or(ImpossibleReason::ItemNotCarried)?;
        let effect = item.consumable().ok_or(ImpossibleReason::NotConsumable)?;

        let aimed = self.target.unwrap_or(actor.position);
        let target = view.actor_at(aimed).and_then(|id| view.actor(id));

        if let Some(target) = target.filter(|target| target.fighter.is_evading()) {
            return Ok(UseItemPlan::Evaded {
                target: target.id,
                target_name: target.name.clone(),
            });
        }

        match effect {
            ConsumableEffect::Healing { amount } => {
                if actor.fighter.hp() == actor.fighter.max_hp {
                    return Err(ImpossibleReason::HealthFull.into());
                }
                Ok(UseItemPlan::Heal {
                    amount,
                    item_name: item.name.clone(),
                })
            }
            ConsumableEffect::Bolt { damage } => {
                let target = target.ok_or(ImpossibleReason::NoTarget)?;
                if target.id == actor.id {
                    return Err(ImpossibleReason::TargetSelf.into());
                }
                Ok(UseItemPlan::Bolt {
                    target: target.id,
                    damage,
                    target_name: target.name.clone(),
                })
            }
        }
    }

    fn apply(&self, plan: UseItemPlan, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let (effect, amount) = match plan {
            UseItemPlan::Evaded {
                target,
                target_name,
            } => {
                ctx.log(
                    format!("{} dodges the attack", capitalize(&target_name)),
                    MessageStyle::Neutral,
                );
                return ActionOutcome::ItemEvaded {
                    item: self.item,
                    target,
                };
            }
            UseItemPlan::Heal { amount, item_name } => {
                let recovered = ctx
                    .actor_mut(self.actor)
                    .map_or(0, |actor| actor.apply_healing(amount));
                ctx.log(
                    format!("You consume the {item_name}, and recover {recovered} HP!"),
                    MessageStyle::HealthRecovered,
                );
                (ConsumableEffect::Healing { amount }, recovered)
            }
            UseItemPlan::Bolt {
                target,
                damage,
                target_name,
            } => {
                ctx.log(
                    format!("A bolt strikes the {target_name} for {damage} damage!"),
                    MessageStyle::Neutral,
                );
                ctx.damage_actor(target, damage);
                (ConsumableEffect::Bolt { damage }, damage)
            }
        };

        // Consumed: remove from inventory.
        if let Some(inventory) = ctx
            .actor_mut(self.actor)
            .and_then(|actor| actor.inventory.as_mut())
        {
            inventory.remove(self.item);
        }

        ActionOutcome::ItemUsed {
            item: self.item,
            effect,
            amount,
        }
    }
}
