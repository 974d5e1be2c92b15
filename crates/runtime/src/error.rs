//! Errors surfaced by the session API.
use delve_core::{EntityId, Impossible};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The player's action failed validation; nothing changed and no NPC acted.
    #[error(transparent)]
    Rejected(#[from] Impossible),

    #[error("the player is dead")]
    PlayerDead,

    #[error("action actor {provided} is not the player")]
    NotPlayerAction { provided: EntityId },
}

impl RuntimeError {
    /// The rejection, when the error came from the rules.
    pub fn impossible(&self) -> Option<&Impossible> {
        match self {
            Self::Rejected(impossible) => Some(impossible),
            _ => None,
        }
    }
}
