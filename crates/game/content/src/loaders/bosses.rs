//! Boss roster loader.

use std::path::Path;

use ascension_core::BossDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Boss roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossCatalog {
    pub bosses: Vec<BossDefinition>,
}

/// Loader for the boss roster.
pub struct BossLoader;

impl BossLoader {
    /// Load the boss roster from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a BossCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<BossDefinition>> {
        let content = read_file(path)?;
        let catalog: BossCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boss catalog RON: {}", e))?;

        Ok(catalog.bosses)
    }
}
