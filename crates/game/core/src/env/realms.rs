use crate::formula::Tier;
use crate::state::Rewards;

/// Read-only access to the ordered realm ladder.
pub trait RealmOracle: Send + Sync {
    /// Realm at `index`, or `None` past the end of the ladder.
    fn realm(&self, index: usize) -> Option<&RealmDefinition>;

    /// Number of realms in the ladder.
    fn realm_count(&self) -> usize;

    /// Highest reachable realm index.
    fn max_realm(&self) -> usize {
        self.realm_count().saturating_sub(1)
    }
}

/// One rung of the progression ladder.
///
/// Index `i + 1` is harder than index `i` by construction of the curve formulas;
/// this is not checked at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealmDefinition {
    pub index: usize,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Stage band name, e.g. "Golden Core".
    pub stage: String,
    pub tier: Tier,
    /// What it takes to break through *into* this realm.
    pub requirements: RealmRequirements,
    pub breakthrough: BreakthroughProfile,
    /// Event ids that fit this realm's narrative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub possible_events: Vec<String>,
    /// Narration shown when a breakthrough into this realm succeeds.
    pub success_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealmRequirements {
    pub progress: u64,
    pub currency: u64,
    /// Breaking through into this realm triggers a heavenly tribulation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tribulation: bool,
    /// Special opportunity the narrative expects (not enforced by the engine).
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_opportunity: Option<String>,
    /// Boss the narrative expects defeated first (not enforced by the engine).
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss_required: Option<String>,
}

/// Catalog-authored breakthrough figures, shown to players before an attempt.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakthroughProfile {
    pub base_success_rate: u32,
    pub inner_demon_chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub failure_risks: Vec<String>,
    pub reward_on_success: Rewards,
}
