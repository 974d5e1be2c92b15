//! Combat resolution system.
//!
//! Pure functions that turn two combat snapshots and a swing style into a
//! [`MeleeResolution`]. Applying the result to state is the job of the melee
//! action.
//!
//! # Core Functions
//!
//! - `resolve_melee`: exhaustion gate, then evasion, then damage
//! - `stamina_required` / `stamina_payment`: light and heavy stamina rules
//! - `calculate_damage`: power (scaled when heavy) minus defense

pub mod damage;
pub mod result;

pub use damage::{AttackStyle, calculate_damage, stamina_payment, stamina_required};
pub use result::{CombatSnapshot, MeleeResolution, resolve_melee};
