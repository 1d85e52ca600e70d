//! Traits describing read-only catalog data and randomness.
//!
//! Oracles expose the realm ladder, boss roster and event catalog. They are
//! authored outside the engine and never validated or mutated by it. The
//! [`RngOracle`] is the only source of randomness a resolver may use.
mod bosses;
mod error;
mod events;
mod realms;
mod rng;
mod snapshot;

pub use bosses::{BossDefinition, BossDifficulty, BossOracle, BossRewards, BossStats};
pub use error::OracleError;
pub use events::{
    ChoiceRequirements, EventChoice, EventOracle, EventOutcomeDefinition, OutcomeEffects,
    RandomEventDefinition, UnmetRequirement,
};
pub use realms::{BreakthroughProfile, RealmDefinition, RealmOracle, RealmRequirements};
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};
pub use snapshot::CatalogSnapshot;
