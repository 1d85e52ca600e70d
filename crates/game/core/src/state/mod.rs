//! Player state representation.
//!
//! [`PlayerState`] is owned entirely by the caller. The engine reads it, resolvers
//! describe changes as a [`StateDelta`], and the caller produces the next state with
//! [`PlayerState::apply`]. Nothing in the engine keeps a reference across calls.
mod delta;

pub use delta::StateDelta;

use crate::config::GameConfig;

/// The four bounded attributes, each kept in `[MIN_STAT, MAX_STAT]`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    /// Scales cultivation speed and battle power.
    Constitution,
    /// Scales breakthrough odds and battle power.
    Insight,
    /// Scales event luck, cultivation currency and battle variance.
    Fortune,
    /// Resists inner demons and steadies tribulations.
    InnerCalm,
}

/// Canonical snapshot of a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// Primary advancement resource. Only penalties reduce it.
    pub progress: u64,
    pub constitution: u8,
    pub insight: u8,
    pub fortune: u8,
    pub inner_calm: u8,
    /// Spendable resource paid for breakthroughs.
    pub currency: u64,
    pub reputation: u64,
    /// Index into the realm catalog.
    pub realm: usize,
    /// Faction the player belongs to; membership grants the guild cultivation bonus.
    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Option<String>,
}

impl PlayerState {
    /// Creates a fresh player with the fixed starting values.
    pub fn new() -> Self {
        Self {
            progress: 0,
            constitution: GameConfig::STARTING_CONSTITUTION,
            insight: GameConfig::STARTING_INSIGHT,
            fortune: GameConfig::STARTING_FORTUNE,
            inner_calm: GameConfig::STARTING_INNER_CALM,
            currency: GameConfig::STARTING_CURRENCY,
            reputation: 0,
            realm: 0,
            faction: None,
        }
    }

    pub fn with_progress(mut self, progress: u64) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_currency(mut self, currency: u64) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_realm(mut self, realm: usize) -> Self {
        self.realm = realm;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute, value: u8) -> Self {
        *self.attribute_mut(attribute) = value;
        self
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    /// Returns true if the player belongs to a faction.
    #[inline]
    pub fn has_faction(&self) -> bool {
        self.faction.is_some()
    }

    pub fn attribute(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Constitution => self.constitution,
            Attribute::Insight => self.insight,
            Attribute::Fortune => self.fortune,
            Attribute::InnerCalm => self.inner_calm,
        }
    }

    fn attribute_mut(&mut self, attribute: Attribute) -> &mut u8 {
        match attribute {
            Attribute::Constitution => &mut self.constitution,
            Attribute::Insight => &mut self.insight,
            Attribute::Fortune => &mut self.fortune,
            Attribute::InnerCalm => &mut self.inner_calm,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resource gains granted by a breakthrough, boss or event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub progress: u64,
    pub currency: u64,
    pub reputation: u64,
}

impl Rewards {
    pub const fn new(progress: u64, currency: u64, reputation: u64) -> Self {
        Self {
            progress,
            currency,
            reputation,
        }
    }

    pub fn to_delta(&self) -> StateDelta {
        StateDelta::new()
            .progress(saturating_i64(self.progress))
            .currency(saturating_i64(self.currency))
            .reputation(saturating_i64(self.reputation))
    }
}

/// Losses imposed by a failed breakthrough or battle.
///
/// All fields are magnitudes; [`Penalty::to_delta`] turns them into negative deltas.
/// Only non-zero fields end up in the delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penalty {
    pub progress: u64,
    pub currency: u64,
    pub inner_calm: u8,
    pub fortune: u8,
}

impl Penalty {
    pub fn to_delta(&self) -> StateDelta {
        let mut delta = StateDelta::new().progress(-saturating_i64(self.progress));
        if self.currency > 0 {
            delta = delta.currency(-saturating_i64(self.currency));
        }
        if self.inner_calm > 0 {
            delta = delta.inner_calm(-i32::from(self.inner_calm));
        }
        if self.fortune > 0 {
            delta = delta.fortune(-i32::from(self.fortune));
        }
        delta
    }
}

/// `value * percent / 100`, truncated.
#[inline]
pub(crate) fn percent_of(value: u64, percent: u64) -> u64 {
    ((u128::from(value) * u128::from(percent)) / 100) as u64
}

#[inline]
pub(crate) fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
