//! Oracle access errors.
//!
//! Errors raised when a caller references catalog data that does not exist.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when looking up catalog entries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Realm index outside the ladder.
    #[error("realm {0} not found")]
    RealmNotFound(usize),

    /// Boss id unknown to the roster.
    #[error("boss '{0}' not found")]
    BossNotFound(String),

    /// Event id unknown to the event catalog.
    #[error("event '{0}' not found")]
    EventNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // A player sitting outside the ladder means corrupted state
            RealmNotFound(_) => ErrorSeverity::Fatal,
            BossNotFound(_) | EventNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            RealmNotFound(_) => "ORACLE_REALM_NOT_FOUND",
            BossNotFound(_) => "ORACLE_BOSS_NOT_FOUND",
            EventNotFound(_) => "ORACLE_EVENT_NOT_FOUND",
        }
    }
}
