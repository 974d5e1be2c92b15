//! Sources of NPC intent.
//!
//! The session asks a provider for one action per living NPC per turn. A
//! provider only proposes; the engine still validates the action.
use delve_core::{Action, AttackStyle, Displacement, EntityId, GameState, MapOracle};

/// Chooses the next action for an NPC.
pub trait ActionProvider {
    fn provide_action(&mut self, entity: EntityId, state: &GameState, map: &dyn MapOracle)
    -> Action;
}

/// Always waits. Useful for tests and as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaitActionProvider;

impl ActionProvider for WaitActionProvider {
    fn provide_action(&mut self, entity: EntityId, _: &GameState, _: &dyn MapOracle) -> Action {
        Action::wait(entity)
    }
}

/// Attacks the player when adjacent and closes in when within sight.
///
/// Steps greedily along both axes; a blocked step is rejected by the engine
/// and the session falls back to waiting.
#[derive(Clone, Copy, Debug)]
pub struct HostileActionProvider {
    /// Chebyshev radius inside which the NPC notices the player.
    pub sight: u32,
}

impl HostileActionProvider {
    pub const DEFAULT_SIGHT: u32 = 8;

    pub fn new(sight: u32) -> Self {
        Self { sight }
    }
}

impl Default for HostileActionProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIGHT)
    }
}

impl ActionProvider for HostileActionProvider {
    fn provide_action(&mut self, entity: EntityId, state: &GameState, _: &dyn MapOracle) -> Action {
        let player = state.player();
        let Some(actor) = state.entities.actor(entity) else {
            return Action::wait(entity);
        };
        if !player.is_alive() {
            return Action::wait(entity);
        }

        let dx = player.position.x - actor.position.x;
        let dy = player.position.y - actor.position.y;
        let distance = dx.unsigned_abs().max(dy.unsigned_abs());
        let step = Displacement::new(dx.signum(), dy.signum());

        match distance {
            0 => Action::wait(entity),
            1 => Action::melee(entity, step, AttackStyle::Light),
            d if d <= self.sight => Action::movement(entity, step),
            _ => Action::wait(entity),
        }
    }
}
