//! Deterministic progression rules for a cultivation RPG.
//!
//! `ascension-core` defines the curve formulas, the player state and its clamping
//! mutator, the read-only catalog oracles, and the resolvers for cultivation,
//! breakthroughs, random events and boss battles. Everything here is a pure
//! function of its inputs plus an injected random source; the runtime and
//! offline tools depend on the types re-exported below.
pub mod config;
pub mod env;
pub mod error;
pub mod formula;
pub mod resolve;
pub mod state;

pub use config::GameConfig;
pub use env::{
    BossDefinition, BossDifficulty, BossOracle, BossRewards, BossStats, BreakthroughProfile,
    CatalogSnapshot, ChoiceRequirements, EventChoice, EventOracle, EventOutcomeDefinition,
    OracleError, OutcomeEffects, PcgRng, RandomEventDefinition, RealmDefinition, RealmOracle,
    RealmRequirements, RngOracle, ScriptedRng, UnmetRequirement, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use formula::{Tier, TribulationDifficulty};
pub use resolve::{
    BattleOutcome, BreakthroughCheck, BreakthroughOutcome, BreakthroughVerdict, CultivationError,
    CultivationOutcome, EventError, EventOutcome, EventResolution, Ineligibility, LockedChoice,
    PreparedEvent, SessionDuration, TrialChances, TrialState, available_bosses, base_power,
    check_breakthrough, prepare_event, resolve_battle, resolve_breakthrough, resolve_cultivation,
    resolve_event, select_event,
};
pub use state::{Attribute, Penalty, PlayerState, Rewards, StateDelta};
