//! Inventory actions: picking up, dropping and equipping items.

use crate::action::transition::living_actor;
use crate::action::{ActionContext, ActionOutcome, ActionTransition, Impossible, ImpossibleReason};
use crate::config::GameConfig;
use crate::env::WorldView;
use crate::log::MessageStyle;
use crate::state::{ActorState, EntityId, EquipChange, InventoryState, ItemState, Position};

fn inventory_of(actor: &ActorState) -> Result<&InventoryState, Impossible> {
    actor
        .inventory
        .as_ref()
        .ok_or_else(|| ImpossibleReason::NoInventory.into())
}

fn carried_item<'a>(actor: &'a ActorState, item: EntityId) -> Result<&'a ItemState, Impossible> {
    inventory_of(actor)?
        .item(item)
        .ok_or_else(|| ImpossibleReason::ItemNotCarried.into())
}

fn item_name(ctx: &ActionContext<'_>, actor: EntityId, item: EntityId) -> Option<String> {
    ctx.actor(actor)?
        .inventory
        .as_ref()?
        .item(item)
        .map(|item| item.name.clone())
}

/// Logs one line per slot change, removals first.
fn log_equip_change(ctx: &mut ActionContext<'_>, actor: EntityId, change: EquipChange) {
    let (removed, equipped) = match change {
        EquipChange::Equipped { item, replaced } => (replaced, Some(item)),
        EquipChange::Unequipped { item } => (Some(item), None),
    };
    if let Some(name) = removed.and_then(|item| item_name(ctx, actor, item)) {
        ctx.log(format!("You remove the {name}."), MessageStyle::Neutral);
    }
    if let Some(name) = equipped.and_then(|item| item_name(ctx, actor, item)) {
        ctx.log(format!("You equip the {name}."), MessageStyle::Neutral);
    }
}

// ============================================================================
// Pickup
// ============================================================================

/// Pick up the item lying on the actor's tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl ActionTransition for PickupAction {
    type Plan = EntityId;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        _config: &GameConfig,
    ) -> Result<EntityId, Impossible> {
        let actor = living_actor(view, self.actor)?;
        let inventory = inventory_of(actor)?;
        let item = view
            .state
            .floor
            .item_at(actor.position)
            .ok_or(ImpossibleReason::NothingToPickUp)?;
        if inventory.is_full() {
            return Err(ImpossibleReason::InventoryFull.into());
        }
        Ok(item.id)
    }

    fn apply(&self, item: EntityId, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        if let Some(item) = ctx.state.floor.remove_item(item) {
            let name = item.name.clone();
            let inventory = ctx
                .state
                .entities
                .actor_mut(self.actor)
                .and_then(|actor| actor.inventory.as_mut());
            let rejected = match inventory {
                Some(inventory) => inventory.add(item).err(),
                None => Some(item),
            };
            match rejected {
                // Validation guarantees room; restore the floor if that ever fails.
                Some(item) => ctx.state.floor.items.push(item),
                None => ctx.log(format!("You picked up the {name}!"), MessageStyle::Neutral),
            }
        }
        ActionOutcome::PickedUp { item }
    }
}

// ============================================================================
// Equip
// ============================================================================

/// Equip a carried item, or take it off when it is already worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for EquipAction {
    type Plan = ItemState;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        _config: &GameConfig,
    ) -> Result<ItemState, Impossible> {
        let actor = living_actor(view, self.actor)?;
        let item = carried_item(actor, self.item)?;
        if item.equippable().is_none() || actor.equipment.is_none() {
            return Err(ImpossibleReason::NotEquippable.into());
        }
        Ok(item.clone())
    }

    fn apply(&self, item: ItemState, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let change = ctx
            .actor_mut(self.actor)
            .and_then(|actor| actor.equipment.as_mut())
            .and_then(|equipment| equipment.toggle_equip(&item));

        match change {
            Some(change) => {
                log_equip_change(ctx, self.actor, change);
                ActionOutcome::Equipped(change)
            }
            // Unreachable after validation: item is equippable and equipment exists.
            None => ActionOutcome::Equipped(EquipChange::Unequipped { item: item.id }),
        }
    }
}

// ============================================================================
// Drop
// ============================================================================

/// Drop a carried item onto the actor's tile, unequipping it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for DropAction {
    type Plan = Position;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(
        &self,
        view: &WorldView<'_>,
        _config: &GameConfig,
    ) -> Result<Position, Impossible> {
        let actor = living_actor(view, self.actor)?;
        carried_item(actor, self.item)?;
        Ok(actor.position)
    }

    fn apply(&self, at: Position, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let unequipped = ctx
            .actor_mut(self.actor)
            .and_then(|actor| actor.equipment.as_mut())
            .is_some_and(|equipment| equipment.unequip(self.item));
        if unequipped {
            log_equip_change(ctx, self.actor, EquipChange::Unequipped { item: self.item });
        }

        let dropped = ctx
            .actor_mut(self.actor)
            .and_then(|actor| actor.inventory.as_mut())
            .and_then(|inventory| inventory.remove(self.item));
        if let Some(mut item) = dropped {
            item.position = at;
            ctx.log(format!("You dropped the {}.", item.name), MessageStyle::Neutral);
            ctx.state.floor.items.push(item);
        }

        ActionOutcome::Dropped {
            item: self.item,
            at,
        }
    }
}
