//! Realm ladder loader.

use std::path::Path;

use ascension_core::RealmDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Realm ladder structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmCatalog {
    pub realms: Vec<RealmDefinition>,
}

/// Loader for a hand-authored realm ladder.
pub struct RealmLoader;

impl RealmLoader {
    /// Load the realm ladder from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RealmDefinition>> {
        let content = read_file(path)?;
        let catalog: RealmCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse realm catalog RON: {}", e))?;

        Ok(catalog.realms)
    }
}
