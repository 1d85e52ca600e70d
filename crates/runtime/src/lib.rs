//! Runtime orchestration for the progression engine.
//!
//! The core resolvers are pure; this crate is the caller they expect. It
//! validates requests, looks catalog entries up by id, seeds a fresh random
//! stream per action, applies the returned deltas, and logs every step.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error and report types clients interact with
//! - [`oracle`] holds the shared, read-only catalog
pub mod api;
pub mod oracle;
pub mod runtime;

pub use api::{ActionReport, CultivationReport, Result, RuntimeError};
pub use oracle::OracleManager;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
