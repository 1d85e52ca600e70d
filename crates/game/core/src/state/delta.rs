use super::PlayerState;
use crate::config::GameConfig;

/// Sparse, signed change to a [`PlayerState`].
///
/// One optional field per mutable attribute; absent fields leave the player
/// untouched. Resolvers return deltas and never mutate state themselves.
///
/// # Clamping Rules
///
/// Applied field by field in [`PlayerState::apply`]:
/// - constitution, insight, fortune, inner calm: clamped into `[MIN_STAT, MAX_STAT]`
/// - progress, currency, reputation: floored at 0
/// - realm: floored at 0 (upper bound is the catalog's concern)
///
/// Clamping is idempotent, not invertible: inner calm 98 + 10 → 100, then −10 → 90.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    pub progress: Option<i64>,
    pub constitution: Option<i32>,
    pub insight: Option<i32>,
    pub fortune: Option<i32>,
    pub inner_calm: Option<i32>,
    pub currency: Option<i64>,
    pub reputation: Option<i64>,
    pub realm: Option<i32>,
}

impl StateDelta {
    /// Creates an empty delta.
    pub const fn new() -> Self {
        Self {
            progress: None,
            constitution: None,
            insight: None,
            fortune: None,
            inner_calm: None,
            currency: None,
            reputation: None,
            realm: None,
        }
    }

    pub const fn progress(mut self, amount: i64) -> Self {
        self.progress = Some(amount);
        self
    }

    pub const fn constitution(mut self, amount: i32) -> Self {
        self.constitution = Some(amount);
        self
    }

    pub const fn insight(mut self, amount: i32) -> Self {
        self.insight = Some(amount);
        self
    }

    pub const fn fortune(mut self, amount: i32) -> Self {
        self.fortune = Some(amount);
        self
    }

    pub const fn inner_calm(mut self, amount: i32) -> Self {
        self.inner_calm = Some(amount);
        self
    }

    pub const fn currency(mut self, amount: i64) -> Self {
        self.currency = Some(amount);
        self
    }

    pub const fn reputation(mut self, amount: i64) -> Self {
        self.reputation = Some(amount);
        self
    }

    pub const fn realm(mut self, amount: i32) -> Self {
        self.realm = Some(amount);
        self
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }
}

impl PlayerState {
    /// Applies `delta` and returns the clamped next state.
    ///
    /// `self` is left untouched; the caller decides when to replace it.
    #[must_use]
    pub fn apply(&self, delta: &StateDelta) -> PlayerState {
        let mut next = self.clone();

        if let Some(amount) = delta.progress {
            next.progress = add_floored(self.progress, amount);
        }
        if let Some(amount) = delta.constitution {
            next.constitution = add_clamped(self.constitution, amount);
        }
        if let Some(amount) = delta.insight {
            next.insight = add_clamped(self.insight, amount);
        }
        if let Some(amount) = delta.fortune {
            next.fortune = add_clamped(self.fortune, amount);
        }
        if let Some(amount) = delta.inner_calm {
            next.inner_calm = add_clamped(self.inner_calm, amount);
        }
        if let Some(amount) = delta.currency {
            next.currency = add_floored(self.currency, amount);
        }
        if let Some(amount) = delta.reputation {
            next.reputation = add_floored(self.reputation, amount);
        }
        if let Some(amount) = delta.realm {
            let realm = (self.realm as i64).saturating_add(i64::from(amount));
            next.realm = realm.max(0) as usize;
        }

        next
    }

    /// Applies several deltas in order, clamping after each one.
    #[must_use]
    pub fn apply_all<'a>(&self, deltas: impl IntoIterator<Item = &'a StateDelta>) -> PlayerState {
        deltas
            .into_iter()
            .fold(self.clone(), |state, delta| state.apply(delta))
    }
}

fn add_floored(value: u64, amount: i64) -> u64 {
    if amount >= 0 {
        value.saturating_add(amount as u64)
    } else {
        value.saturating_sub(amount.unsigned_abs())
    }
}

fn add_clamped(value: u8, amount: i32) -> u8 {
    (i32::from(value).saturating_add(amount))
        .clamp(i32::from(GameConfig::MIN_STAT), i32::from(GameConfig::MAX_STAT)) as u8
}
