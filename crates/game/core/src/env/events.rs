use crate::state::{PlayerState, StateDelta};

/// Read-only access to the random-event catalog.
pub trait EventOracle: Send + Sync {
    fn event(&self, id: &str) -> Option<&RandomEventDefinition>;

    /// All events in catalog order.
    fn events(&self) -> &[RandomEventDefinition];
}

/// A narrative event with player choices.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomEventDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// First realm index (inclusive) at which the event can appear.
    pub available_from: usize,
    /// Last realm index (inclusive) at which the event can appear.
    pub available_to: usize,
    /// Base selection weight.
    pub trigger_chance: f64,
    /// How strongly fortune bends the selection weight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fortune_modifier: f64,
    pub choices: Vec<EventChoice>,
}

impl RandomEventDefinition {
    /// Returns true if the event can appear at `realm`.
    #[inline]
    pub fn is_available_at(&self, realm: usize) -> bool {
        realm >= self.available_from && realm <= self.available_to
    }

    pub fn choice(&self, id: &str) -> Option<&EventChoice> {
        self.choices.iter().find(|choice| choice.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventChoice {
    pub id: String,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: ChoiceRequirements,
    /// Weighted outcomes in catalog order; weights are expected to sum to 100.
    pub outcomes: Vec<EventOutcomeDefinition>,
}

/// Minimum values a player needs to pick a choice. Absent fields impose nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChoiceRequirements {
    pub insight: Option<u8>,
    pub inner_calm: Option<u8>,
    pub fortune: Option<u8>,
    pub currency: Option<u64>,
}

/// A requirement the player failed, with the required and current values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnmetRequirement {
    Insight { required: u8, current: u8 },
    InnerCalm { required: u8, current: u8 },
    Fortune { required: u8, current: u8 },
    Currency { required: u64, current: u64 },
}

impl core::fmt::Display for UnmetRequirement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Insight { required, current } => {
                write!(f, "requires insight >= {required} (current {current})")
            }
            Self::InnerCalm { required, current } => {
                write!(f, "requires inner calm >= {required} (current {current})")
            }
            Self::Fortune { required, current } => {
                write!(f, "requires fortune >= {required} (current {current})")
            }
            Self::Currency { required, current } => {
                write!(f, "requires currency >= {required} (current {current})")
            }
        }
    }
}

impl ChoiceRequirements {
    /// First requirement `player` fails, checked in field order.
    pub fn first_unmet(&self, player: &PlayerState) -> Option<UnmetRequirement> {
        if let Some(required) = self.insight.filter(|&required| player.insight < required) {
            return Some(UnmetRequirement::Insight {
                required,
                current: player.insight,
            });
        }
        if let Some(required) = self.inner_calm.filter(|&required| player.inner_calm < required) {
            return Some(UnmetRequirement::InnerCalm {
                required,
                current: player.inner_calm,
            });
        }
        if let Some(required) = self.fortune.filter(|&required| player.fortune < required) {
            return Some(UnmetRequirement::Fortune {
                required,
                current: player.fortune,
            });
        }
        if let Some(required) = self.currency.filter(|&required| player.currency < required) {
            return Some(UnmetRequirement::Currency {
                required,
                current: player.currency,
            });
        }
        None
    }

    pub fn is_met_by(&self, player: &PlayerState) -> bool {
        self.first_unmet(player).is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventOutcomeDefinition {
    /// Weight out of 100.
    pub probability: f64,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: OutcomeEffects,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flavor: String,
}

/// Signed changes an outcome applies. Zero means "no change".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutcomeEffects {
    pub progress: i64,
    pub constitution: i32,
    pub insight: i32,
    pub fortune: i32,
    pub inner_calm: i32,
    pub currency: i64,
    pub reputation: i64,
    /// Named reward relayed to the caller; never touches player state.
    pub special_reward: Option<String>,
}

impl OutcomeEffects {
    /// Converts the non-zero effects into a delta.
    pub fn to_delta(&self) -> StateDelta {
        let mut delta = StateDelta::new();
        if self.progress != 0 {
            delta = delta.progress(self.progress);
        }
        if self.constitution != 0 {
            delta = delta.constitution(self.constitution);
        }
        if self.insight != 0 {
            delta = delta.insight(self.insight);
        }
        if self.fortune != 0 {
            delta = delta.fortune(self.fortune);
        }
        if self.inner_calm != 0 {
            delta = delta.inner_calm(self.inner_calm);
        }
        if self.currency != 0 {
            delta = delta.currency(self.currency);
        }
        if self.reputation != 0 {
            delta = delta.reputation(self.reputation);
        }
        delta
    }
}
