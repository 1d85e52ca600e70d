//! Values returned to clients after an action.
use ascension_core::{CultivationOutcome, PlayerState};
use serde::Serialize;

/// An outcome together with the player state it produced.
///
/// The runtime never keeps the state; callers replace their copy with `player`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionReport<T> {
    pub outcome: T,
    pub player: PlayerState,
}

impl<T> ActionReport<T> {
    pub fn new(outcome: T, player: PlayerState) -> Self {
        Self { outcome, player }
    }

    pub fn into_parts(self) -> (T, PlayerState) {
        (self.outcome, self.player)
    }
}

/// A cultivation session plus the concrete events drawn for its opportunities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CultivationReport {
    pub session: CultivationOutcome,
    /// One event id per opportunity that found an event for the player's realm.
    pub events: Vec<String>,
}
