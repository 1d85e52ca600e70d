//! In-memory catalog implementing every oracle.
//!
//! Loaded once at process start and shared by reference afterwards; nothing in
//! the engine writes to it.

use super::{
    BossDefinition, BossOracle, EventOracle, RandomEventDefinition, RealmDefinition, RealmOracle,
};

/// Complete static catalog: realm ladder, boss roster and event list.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSnapshot {
    pub realms: Vec<RealmDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bosses: Vec<BossDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<RandomEventDefinition>,
}

impl CatalogSnapshot {
    pub fn new(
        realms: Vec<RealmDefinition>,
        bosses: Vec<BossDefinition>,
        events: Vec<RandomEventDefinition>,
    ) -> Self {
        Self {
            realms,
            bosses,
            events,
        }
    }

    pub fn with_bosses(mut self, bosses: Vec<BossDefinition>) -> Self {
        self.bosses = bosses;
        self
    }

    pub fn with_events(mut self, events: Vec<RandomEventDefinition>) -> Self {
        self.events = events;
        self
    }
}

impl RealmOracle for CatalogSnapshot {
    fn realm(&self, index: usize) -> Option<&RealmDefinition> {
        self.realms.get(index)
    }

    fn realm_count(&self) -> usize {
        self.realms.len()
    }
}

impl BossOracle for CatalogSnapshot {
    fn boss(&self, id: &str) -> Option<&BossDefinition> {
        self.bosses.iter().find(|boss| boss.id == id)
    }

    fn bosses(&self) -> &[BossDefinition] {
        &self.bosses
    }
}

impl EventOracle for CatalogSnapshot {
    fn event(&self, id: &str) -> Option<&RandomEventDefinition> {
        self.events.iter().find(|event| event.id == id)
    }

    fn events(&self) -> &[RandomEventDefinition] {
        &self.events
    }
}
