//! Turn driver for the deterministic game rules.
//!
//! A [`Session`] owns the live state, the active floor map and the message
//! log. The player submits one action at a time; once it is performed every
//! hostile NPC takes its turn through an [`ActionProvider`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the turn loop and floor transitions
//! - [`providers`] sources NPC intent
//! - [`message_log`] keeps the player-facing history
pub mod error;
pub mod message_log;
pub mod providers;
pub mod session;

pub use error::{Result, RuntimeError};
pub use message_log::{Message, MessageLog};
pub use providers::{ActionProvider, HostileActionProvider, WaitActionProvider};
pub use session::{NpcTurn, Session, TurnReport};
