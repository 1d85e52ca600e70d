//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use ascension_core::{
    BossDefinition, CatalogSnapshot, GameConfig, RandomEventDefinition, RealmDefinition,
};

use crate::loaders::{BossLoader, ConfigLoader, EventLoader, LoadResult, RealmLoader};
use crate::realms::generate_realms;
use crate::validate::validate_catalog;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── bosses.ron
/// ├── events.ron
/// └── realms.ron   (optional; generated from the curve formulas when absent)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the realm ladder from `realms.ron`, or generate it if the file is absent.
    pub fn load_realms(&self) -> LoadResult<Vec<RealmDefinition>> {
        let path = self.data_dir.join("realms.ron");
        if path.exists() {
            RealmLoader::load(&path)
        } else {
            Ok(generate_realms())
        }
    }

    /// Load the boss roster from `bosses.ron`.
    pub fn load_bosses(&self) -> LoadResult<Vec<BossDefinition>> {
        let path = self.data_dir.join("bosses.ron");
        BossLoader::load(&path)
    }

    /// Load the event catalog from `events.ron`.
    pub fn load_events(&self) -> LoadResult<Vec<RandomEventDefinition>> {
        let path = self.data_dir.join("events.ron");
        EventLoader::load(&path)
    }

    /// Load and validate the full catalog.
    ///
    /// Fails with every validation issue listed if the content is malformed.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        let catalog =
            CatalogSnapshot::new(self.load_realms()?, self.load_bosses()?, self.load_events()?);

        let issues = validate_catalog(&catalog);
        if !issues.is_empty() {
            let report = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            anyhow::bail!(
                "Invalid catalog in {} ({} issue(s)): {}",
                self.data_dir.display(),
                issues.len(),
                report
            );
        }

        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
