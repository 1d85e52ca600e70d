//! Content loaders for reading catalog data from files.
//!
//! Realms, bosses and events are authored in RON; the tunable rules in TOML.

pub mod bosses;
pub mod config;
pub mod events;
pub mod factory;
pub mod realms;

pub use bosses::BossLoader;
pub use config::ConfigLoader;
pub use events::EventLoader;
pub use factory::ContentFactory;
pub use realms::RealmLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
