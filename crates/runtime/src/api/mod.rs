//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the orchestrator can stay focused on validation and resolution.

pub mod errors;
pub mod report;

pub use errors::{Result, RuntimeError};
pub use report::{ActionReport, CultivationReport};
