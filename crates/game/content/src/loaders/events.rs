//! Random-event catalog loader.

use std::path::Path;

use ascension_core::RandomEventDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Event catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCatalog {
    pub events: Vec<RandomEventDefinition>,
}

/// Loader for the random-event catalog.
pub struct EventLoader;

impl EventLoader {
    /// Load the event catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RandomEventDefinition>> {
        let content = read_file(path)?;
        let catalog: EventCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse event catalog RON: {}", e))?;

        Ok(catalog.events)
    }
}
