use crate::state::Rewards;

/// Read-only access to the boss roster.
pub trait BossOracle: Send + Sync {
    fn boss(&self, id: &str) -> Option<&BossDefinition>;

    /// All bosses in catalog order.
    fn bosses(&self) -> &[BossDefinition];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BossDifficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Realm the boss belongs to.
    pub realm: usize,
    pub difficulty: BossDifficulty,
    pub stats: BossStats,
    pub rewards: BossRewards,
    /// Narration when the player wins.
    pub defeat_text: String,
    /// Narration when the player loses.
    pub lose_text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossStats {
    pub power: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: u64,
    /// Upper bound of the random power swing added each fight.
    pub speed: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossRewards {
    pub progress: u64,
    pub currency: u64,
    pub reputation: u64,
    /// Named items relayed to the caller; they never touch player state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_items: Vec<String>,
}

impl BossRewards {
    /// The resource part of the reward.
    pub fn resources(&self) -> Rewards {
        Rewards::new(self.progress, self.currency, self.reputation)
    }
}
