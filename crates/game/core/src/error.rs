//! Common error infrastructure for delve-core.
//!
//! Domain-specific errors (e.g. `MoveError`, `MeleeError`) are defined in
//! their respective modules alongside the actions they validate. This module
//! provides the shared severity taxonomy that separates the two error kinds
//! the driver must distinguish:
//!
//! - **Recoverable** errors are denied actions: the turn is not consumed,
//!   the `Display` text is the user-facing reason, and the driver should
//!   re-prompt.
//! - Everything else (Validation, Internal, Fatal) is a programming or
//!   state-integrity fault and must not be silently swallowed.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the action was denied but the actor may retry
    /// with the same or an alternative action.
    ///
    /// Examples: destination blocked, inventory full, nothing to attack
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: actor not found, action issued out of turn
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: equipping an item without an equippable capability,
    /// item registry desync. These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - required collaborator missing, cannot continue.
    ///
    /// Examples: no map oracle supplied to a movement action
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all delve-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - For recoverable variants the `Display` text is shown to the player
///   verbatim, so keep it in narration register
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
