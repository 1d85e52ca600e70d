//! Static catalog content and loaders.
//!
//! This crate owns the read-only data the engine consults:
//! - The realm ladder (generated from the curve formulas, or data-driven via RON)
//! - The boss roster (data-driven via RON)
//! - The random-event catalog (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is validated once at load time and never appears in player state.

pub mod realms;
pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use realms::{generate_realm, generate_realms};
pub use validate::{CatalogIssue, validate_catalog};

#[cfg(feature = "loaders")]
pub use loaders::{BossLoader, ConfigLoader, ContentFactory, EventLoader, RealmLoader};
