use crate::error::{ErrorSeverity, GameError};

/// Raised when a required oracle was not supplied to the environment.
///
/// Actions that need world services fail fast with these rather than
/// guessing; a missing oracle is a wiring bug in the driver, not a
/// recoverable gameplay condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("map oracle not available")]
    MapNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MapNotAvailable => "ENV_MAP_NOT_AVAILABLE",
            Self::RngNotAvailable => "ENV_RNG_NOT_AVAILABLE",
        }
    }
}
