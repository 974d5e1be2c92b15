//! Turn loop: the player acts, then every hostile NPC responds.
use delve_core::{
    Action, ActionOutcome, AiPolicy, EntityId, ExecutionOutcome, FloorGenerator, GameConfig,
    GameEngine, GameError, GameState, Impossible, MessageSink, MessageStyle,
};
use tracing::{debug, info, warn};

use crate::error::{Result, RuntimeError};
use crate::message_log::MessageLog;
use crate::providers::{ActionProvider, HostileActionProvider};

/// What happened during one accepted player turn.
#[derive(Clone, Debug)]
pub struct TurnReport {
    pub player: ExecutionOutcome,
    /// New depth when the player took stairs.
    pub entered_depth: Option<u32>,
    pub npc_turns: Vec<NpcTurn>,
}

impl TurnReport {
    /// Every message emitted this turn, player first.
    pub fn messages(&self) -> impl Iterator<Item = &delve_core::LogEntry> {
        self.player
            .messages
            .iter()
            .chain(self.npc_turns.iter().flat_map(|turn| turn.outcome.messages.iter()))
    }
}

#[derive(Clone, Debug)]
pub struct NpcTurn {
    pub entity: EntityId,
    pub outcome: ExecutionOutcome,
}

/// Owns the live game and drives it one player action at a time.
pub struct Session<F: FloorGenerator> {
    state: GameState,
    map: F::Map,
    config: GameConfig,
    floors: F,
    provider: Box<dyn ActionProvider>,
    log: MessageLog,
}

impl<F: FloorGenerator> Session<F> {
    /// Starts a session with hostile NPCs driven by [`HostileActionProvider`].
    pub fn new(state: GameState, map: F::Map, config: GameConfig, floors: F) -> Self {
        info!(
            depth = state.floor.depth,
            npcs = state.entities.npcs.len(),
            "session started"
        );
        Self {
            state,
            map,
            config,
            floors,
            provider: Box::new(HostileActionProvider::default()),
            log: MessageLog::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn map(&self) -> &F::Map {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn player_alive(&self) -> bool {
        self.state.player().is_alive()
    }

    /// Performs a player action, then lets every hostile NPC act.
    ///
    /// A rejected action is written to the log in the impossible style and
    /// returned as [`RuntimeError::Rejected`]; no NPC acts on that turn.
    pub fn submit(&mut self, action: Action) -> Result<TurnReport> {
        if !action.actor().is_player() {
            return Err(RuntimeError::NotPlayerAction {
                provided: action.actor(),
            });
        }
        if !self.player_alive() {
            return Err(RuntimeError::PlayerDead);
        }

        let player = match self.execute(&action) {
            Ok(outcome) => outcome,
            Err(impossible) => {
                self.log
                    .add_message(impossible.to_string(), MessageStyle::Impossible);
                return Err(impossible.into());
            }
        };
        self.log.extend(player.messages.iter().cloned());

        let entered_depth = match player.outcome {
            ActionOutcome::TookStairs(direction) => {
                let generated = self.floors.generate_floor(direction, &self.state);
                self.map = self.state.install_floor(generated);
                info!(
                    depth = self.state.floor.depth,
                    npcs = self.state.entities.npcs.len(),
                    "entered floor"
                );
                Some(self.state.floor.depth)
            }
            _ => None,
        };

        let npc_turns = self.handle_npc_turns();

        Ok(TurnReport {
            player,
            entered_depth,
            npc_turns,
        })
    }

    fn execute(&mut self, action: &Action) -> std::result::Result<ExecutionOutcome, Impossible> {
        GameEngine::new(&mut self.state, &self.config).execute(&self.map, action)
    }

    fn handle_npc_turns(&mut self) -> Vec<NpcTurn> {
        let hostile: Vec<EntityId> = self
            .state
            .entities
            .npcs
            .iter()
            .filter(|npc| npc.ai == Some(AiPolicy::Hostile))
            .map(|npc| npc.id)
            .collect();

        let mut turns = Vec::with_capacity(hostile.len());
        for entity in hostile {
            if !self.player_alive() {
                debug!("player died, remaining npc turns skipped");
                break;
            }
            // Killed earlier this turn.
            let alive = self
                .state
                .entities
                .actor(entity)
                .is_some_and(|npc| npc.is_alive());
            if !alive {
                continue;
            }

            let action = self
                .provider
                .provide_action(entity, &self.state, &self.map);
            let outcome = match self.execute(&action) {
                Ok(outcome) => outcome,
                Err(impossible) => {
                    warn!(
                        actor = %entity,
                        action = action.as_snake_case(),
                        reason = %impossible,
                        code = impossible.error_code(),
                        severity = impossible.severity().as_str(),
                        "npc action rejected, waiting instead"
                    );
                    match self.execute(&Action::wait(entity)) {
                        Ok(outcome) => outcome,
                        Err(_) => continue,
                    }
                }
            };
            self.log.extend(outcome.messages.iter().cloned());
            turns.push(NpcTurn { entity, outcome });
        }
        turns
    }
}
