//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! action flows through the same `execute()` path: validation against the
//! pre-mutation state, then the infallible apply.

use crate::action::{Action, ActionContext, ActionOutcome, Impossible};
use crate::config::GameConfig;
use crate::env::MapOracle;
use crate::log::LogEntry;
use crate::state::{DeathReport, GameState};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific result (combat resolution, item effects, etc.).
    pub outcome: ActionOutcome,
    /// Log lines emitted while applying, in order.
    pub messages: Vec<LogEntry>,
    /// Actors that died during this action, in order.
    pub deaths: Vec<DeathReport>,
}

/// Game engine that validates and applies actions.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Executes an action against `map`.
    ///
    /// The turn nonce advances only when the action is performed; an
    /// `Impossible` result leaves the state untouched.
    pub fn execute(
        &mut self,
        map: &dyn MapOracle,
        action: &Action,
    ) -> Result<ExecutionOutcome, Impossible> {
        let mut messages = Vec::new();
        let mut ctx = ActionContext::new(self.state, map, self.config, &mut messages);

        let outcome = match action.perform(&mut ctx) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::debug!(
                    action = action.as_snake_case(),
                    actor = %action.actor(),
                    reason = %error,
                    "action rejected"
                );
                return Err(error);
            }
        };
        let deaths = ctx.take_deaths();

        self.state.turn.nonce += 1;
        tracing::debug!(
            action = action.as_snake_case(),
            actor = %action.actor(),
            nonce = self.state.turn.nonce,
            deaths = deaths.len(),
            "action executed"
        );

        Ok(ExecutionOutcome {
            outcome,
            messages,
            deaths,
        })
    }

    pub fn state(&self) -> &GameState {
        self.state
    }
}
