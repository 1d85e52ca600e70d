//! Resolvers for player actions.
//!
//! Each resolver is a pure function of the player state, the catalog entries it
//! needs and an injected [`RngOracle`](crate::env::RngOracle). None of them call
//! each other and none mutate the player: outcomes describe a
//! [`StateDelta`](crate::state::StateDelta) and expose `apply_to` for callers
//! that want the next state directly.
mod battle;
mod breakthrough;
mod cultivation;
mod event;

pub use battle::{BattleOutcome, available_bosses, base_power, player_power, resolve_battle};
pub use breakthrough::{
    BreakthroughCheck, BreakthroughOutcome, BreakthroughVerdict, Ineligibility, TrialChances,
    TrialState, check_breakthrough, resolve_breakthrough,
};
pub use cultivation::{CultivationError, CultivationOutcome, SessionDuration, resolve_cultivation};
pub use event::{
    EventError, EventOutcome, EventResolution, LockedChoice, PreparedEvent, event_weight,
    prepare_event, resolve_event, select_event, select_outcome,
};
