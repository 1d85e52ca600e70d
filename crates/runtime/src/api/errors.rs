//! Unified error types surfaced by the runtime API.
//!
//! Wraps rejected requests from the core resolvers and content loading failures
//! so clients can bubble them up with consistent context.
use std::path::PathBuf;

use ascension_core::{CultivationError, ErrorSeverity, EventError, GameError, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Cultivation(#[from] CultivationError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("player realm {index} is outside the catalog ({len} realms)")]
    RealmOutOfCatalog { index: usize, len: usize },

    #[error("failed to load content from {dir}")]
    Content {
        dir: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl RuntimeError {
    /// Severity of the underlying failure.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Cultivation(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
            Self::Event(error) => error.severity(),
            Self::RealmOutOfCatalog { .. } | Self::Content { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Stable identifier for logs and client responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Cultivation(error) => error.error_code(),
            Self::Oracle(error) => error.error_code(),
            Self::Event(error) => error.error_code(),
            Self::RealmOutOfCatalog { .. } => "RUNTIME_REALM_OUT_OF_CATALOG",
            Self::Content { .. } => "RUNTIME_CONTENT",
        }
    }
}
