//! Error classification shared by core error types.
//!
//! Errors live next to the code that raises them (see
//! [`crate::action::Impossible`]) and implement [`GameError`] so the runtime
//! can tell a blocked step from a broken caller.

/// How a caller should treat a rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// The world said no; choose another action.
    Recoverable,
    /// The request referenced something the actor cannot use.
    Validation,
    /// The request named an entity that does not exist.
    Internal,
}

impl ErrorSeverity {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for delve-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
