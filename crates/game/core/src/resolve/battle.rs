//! Boss battles.

use crate::config::GameConfig;
use crate::env::{BossDefinition, BossOracle, RngOracle};
use crate::formula::victory_chance;
use crate::state::{Penalty, PlayerState, Rewards, StateDelta, percent_of};

const DEFEAT_PROGRESS_PERCENT: u64 = 15;
const DEFEAT_CURRENCY_PERCENT: u64 = 10;
const DEFEAT_FORTUNE_LOSS: u8 = 5;

/// Player power without the random fortune swing.
///
/// `progress / 1000 + constitution * 100 + insight * 50`
pub fn base_power(player: &PlayerState) -> f64 {
    player.progress as f64 / 1000.0
        + f64::from(player.constitution) * 100.0
        + f64::from(player.insight) * 50.0
}

/// Player power for a fortune draw in `[0, 1)`.
pub fn player_power(player: &PlayerState, fortune_draw: f64) -> f64 {
    base_power(player) + fortune_draw * f64::from(player.fortune) * 10.0
}

/// Bosses whose realm lies within the configured window around the player's realm.
pub fn available_bosses<'a, O>(
    player: &PlayerState,
    bosses: &'a O,
    config: &GameConfig,
) -> Vec<&'a BossDefinition>
where
    O: BossOracle + ?Sized,
{
    let lowest = player.realm.saturating_sub(config.boss_realms_below as usize);
    let highest = player.realm.saturating_add(config.boss_realms_above as usize);
    bosses
        .bosses()
        .iter()
        .filter(|boss| (lowest..=highest).contains(&boss.realm))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub boss_id: String,
    pub victory: bool,
    pub player_power: f64,
    pub boss_power: f64,
    pub power_ratio: f64,
    pub victory_chance: u32,
    pub rewards: Option<Rewards>,
    /// Named items relayed on victory; they never change the player state.
    pub special_items: Vec<String>,
    pub penalty: Option<Penalty>,
    pub message: String,
    pub flavor: String,
}

impl BattleOutcome {
    pub fn delta(&self) -> StateDelta {
        match (&self.rewards, &self.penalty) {
            (Some(rewards), _) => rewards.to_delta(),
            (None, Some(penalty)) => penalty.to_delta(),
            (None, None) => StateDelta::new(),
        }
    }

    pub fn apply_to(&self, player: &PlayerState) -> PlayerState {
        player.apply(&self.delta())
    }
}

/// Fights `boss` once.
///
/// Draws three values in order: the player's fortune swing, the boss's speed
/// swing, and the victory roll.
pub fn resolve_battle<R>(player: &PlayerState, boss: &BossDefinition, rng: &mut R) -> BattleOutcome
where
    R: RngOracle + ?Sized,
{
    let player_power = player_power(player, rng.unit());
    let boss_power = boss.stats.power as f64 + rng.unit() * boss.stats.speed as f64;
    let power_ratio = if boss_power > 0.0 {
        player_power / boss_power
    } else {
        f64::INFINITY
    };
    let chance = victory_chance(power_ratio);
    let victory = rng.roll_percent() < f64::from(chance);

    let mut outcome = BattleOutcome {
        boss_id: boss.id.clone(),
        victory,
        player_power,
        boss_power,
        power_ratio,
        victory_chance: chance,
        rewards: None,
        special_items: Vec::new(),
        penalty: None,
        message: String::new(),
        flavor: String::new(),
    };

    if victory {
        outcome.rewards = Some(boss.rewards.resources());
        outcome.special_items = boss.rewards.special_items.clone();
        outcome.message = format!("Victory over {}!", boss.name);
        outcome.flavor = boss.defeat_text.clone();
    } else {
        outcome.penalty = Some(Penalty {
            progress: percent_of(player.progress, DEFEAT_PROGRESS_PERCENT),
            currency: percent_of(player.currency, DEFEAT_CURRENCY_PERCENT),
            fortune: DEFEAT_FORTUNE_LOSS,
            ..Penalty::default()
        });
        outcome.message = format!("Defeated by {}.", boss.name);
        outcome.flavor = boss.lose_text.clone();
    }

    outcome
}
