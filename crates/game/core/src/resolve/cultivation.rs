//! Cultivation sessions.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::formula::{cultivation_currency_reward, cultivation_speed, event_chance};
use crate::state::{PlayerState, StateDelta, saturating_i64};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CultivationError {
    #[error("cultivation duration {minutes} min is outside {min}..={max}")]
    DurationOutOfRange { minutes: u32, min: u32, max: u32 },
}

impl GameError for CultivationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DurationOutOfRange { .. } => "CULTIVATION_DURATION_OUT_OF_RANGE",
        }
    }
}

/// Session length in minutes, validated to
/// `[MIN_CULTIVATION_MINUTES, MAX_CULTIVATION_MINUTES]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct SessionDuration(u32);

impl SessionDuration {
    pub fn new(minutes: u32) -> Result<Self, CultivationError> {
        let (min, max) = (
            GameConfig::MIN_CULTIVATION_MINUTES,
            GameConfig::MAX_CULTIVATION_MINUTES,
        );
        if (min..=max).contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(CultivationError::DurationOutOfRange { minutes, min, max })
        }
    }

    #[inline]
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = CultivationError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> Self {
        duration.0
    }
}

/// Yield of one cultivation session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CultivationOutcome {
    pub duration_minutes: u32,
    /// Progress per minute at the time of the session.
    pub speed: u64,
    pub progress_gained: u64,
    pub currency_gained: u64,
    /// Per-window chance that an event opportunity occurs.
    pub event_chance: f64,
    /// One entry per elapsed window; `true` where an opportunity occurred.
    pub event_windows: Vec<bool>,
    pub event_opportunities: u32,
}

impl CultivationOutcome {
    /// Number of full event windows the session covered.
    pub fn windows(&self) -> usize {
        self.event_windows.len()
    }

    pub fn delta(&self) -> StateDelta {
        StateDelta::new()
            .progress(saturating_i64(self.progress_gained))
            .currency(saturating_i64(self.currency_gained))
    }

    pub fn apply_to(&self, player: &PlayerState) -> PlayerState {
        player.apply(&self.delta())
    }
}

/// Resolves a cultivation session of `duration`.
///
/// Faction members cultivate with the configured guild bonus. The session is cut
/// into `config.event_window_minutes` windows (a trailing partial window does not
/// count) and each window draws once against [`event_chance`].
pub fn resolve_cultivation<R>(
    player: &PlayerState,
    duration: SessionDuration,
    config: &GameConfig,
    rng: &mut R,
) -> CultivationOutcome
where
    R: RngOracle + ?Sized,
{
    let minutes = duration.minutes();
    let guild_bonus = if player.has_faction() {
        config.guild_bonus()
    } else {
        0.0
    };

    let speed = cultivation_speed(player.realm, player.constitution, guild_bonus);
    let progress_gained = speed.saturating_mul(u64::from(minutes));
    let currency_gained = cultivation_currency_reward(player.realm, minutes, player.fortune);

    let chance = event_chance(player.fortune);
    let windows = minutes / config.event_window_minutes.max(1);
    let event_windows: Vec<bool> = (0..windows).map(|_| rng.roll_percent() < chance).collect();
    let event_opportunities = event_windows.iter().filter(|&&hit| hit).count() as u32;

    CultivationOutcome {
        duration_minutes: minutes,
        speed,
        progress_gained,
        currency_gained,
        event_chance: chance,
        event_windows,
        event_opportunities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn duration_bounds_are_inclusive() {
        assert!(SessionDuration::new(1).is_ok());
        assert!(SessionDuration::new(1440).is_ok());
        assert_eq!(
            SessionDuration::new(0),
            Err(CultivationError::DurationOutOfRange {
                minutes: 0,
                min: 1,
                max: 1440
            })
        );
        let error = SessionDuration::new(1441).unwrap_err();
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "CULTIVATION_DURATION_OUT_OF_RANGE");
    }

    #[test]
    fn session_yields_progress_and_currency() {
        let player = PlayerState::new();
        let duration = SessionDuration::new(60).unwrap();
        let mut rng = ScriptedRng::new([0.99]);

        let outcome = resolve_cultivation(&player, duration, &GameConfig::new(), &mut rng);

        assert_eq!(outcome.speed, 15);
        assert_eq!(outcome.progress_gained, 900);
        // floor(10 * 60) * (0.5 + 0.5)
        assert_eq!(outcome.currency_gained, 600);

        let next = outcome.apply_to(&player);
        assert_eq!(next.progress, 900);
        assert_eq!(next.currency, 1600);
    }

    #[test]
    fn faction_members_cultivate_faster() {
        let loner = PlayerState::new();
        let member = PlayerState::new().with_faction("Azure Cloud Sect");
        let duration = SessionDuration::new(10).unwrap();
        let config = GameConfig::new();

        let solo = resolve_cultivation(&loner, duration, &config, &mut ScriptedRng::default());
        let guild = resolve_cultivation(&member, duration, &config, &mut ScriptedRng::default());

        assert_eq!(solo.speed, 15);
        assert_eq!(guild.speed, 16);
    }

    #[test]
    fn one_draw_per_full_window() {
        let player = PlayerState::new();
        // 95 minutes => three full 30-minute windows
        let duration = SessionDuration::new(95).unwrap();
        // Event chance at fortune 50 is 20
        let mut rng = ScriptedRng::new([0.10, 0.50, 0.19]);

        let outcome = resolve_cultivation(&player, duration, &GameConfig::new(), &mut rng);

        assert_eq!(outcome.windows(), 3);
        assert_eq!(outcome.event_windows, vec![true, false, true]);
        assert_eq!(outcome.event_opportunities, 2);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn short_session_draws_nothing() {
        let player = PlayerState::new();
        let duration = SessionDuration::new(29).unwrap();
        let mut rng = ScriptedRng::new([0.0]);

        let outcome = resolve_cultivation(&player, duration, &GameConfig::new(), &mut rng);

        assert_eq!(outcome.windows(), 0);
        assert_eq!(outcome.event_opportunities, 0);
        assert_eq!(rng.consumed(), 0);
    }
}
