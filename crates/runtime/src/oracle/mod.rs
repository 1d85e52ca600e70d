//! Runtime wrapper around the static catalog.
//!
//! The catalog is loaded once and shared behind an [`Arc`]; it is immutable for
//! the lifetime of the runtime. Player state never lives here.
use std::path::Path;
use std::sync::Arc;

use ascension_content::ContentFactory;
use ascension_core::{CatalogSnapshot, GameConfig, RealmOracle};

use crate::api::{Result, RuntimeError};

/// Bundles the catalog and the tunable rules.
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) catalog: Arc<CatalogSnapshot>,
    pub(crate) config: GameConfig,
}

impl OracleManager {
    pub fn new(catalog: impl Into<Arc<CatalogSnapshot>>, config: GameConfig) -> Self {
        Self {
            catalog: catalog.into(),
            config,
        }
    }

    /// Loads and validates everything under `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let factory = ContentFactory::new(data_dir);
        let content_error = |source: anyhow::Error| RuntimeError::Content {
            dir: data_dir.to_path_buf(),
            source,
        };

        let catalog = factory.load_catalog().map_err(content_error)?;
        let config = factory.load_config().map_err(content_error)?;

        tracing::info!(
            realms = catalog.realm_count(),
            bosses = catalog.bosses.len(),
            events = catalog.events.len(),
            dir = %data_dir.display(),
            "catalog loaded"
        );

        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
