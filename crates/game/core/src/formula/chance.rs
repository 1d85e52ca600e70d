//! Probability curves for breakthroughs, sub-trials, events and battles.

use super::realm::base_success_rate;
use crate::config::GameConfig;

/// Heavenly tribulation parameters for a realm.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TribulationDifficulty {
    /// Number of lightning waves.
    pub waves: u32,
    /// Damage of the first wave (narrative only).
    pub base_damage: f64,
    /// Survival percentage before attribute scaling.
    pub survivability: f64,
}

impl TribulationDifficulty {
    /// Difficulty below the tribulation era: nothing to survive.
    pub const NONE: Self = Self {
        waves: 0,
        base_damage: 0.0,
        survivability: 100.0,
    };
}

/// Effective breakthrough success percentage.
///
/// # Formula
///
/// ```text
/// base + (insight - 50) * 0.2 + (fortune - 50) * 0.15 + item_bonus
/// clamped to [5, 95]
/// ```
pub fn breakthrough_chance(realm: usize, insight: u8, fortune: u8, item_bonus: f64) -> f64 {
    let base = f64::from(base_success_rate(realm));
    let insight_bonus = (f64::from(insight) - 50.0) * 0.2;
    let fortune_bonus = (f64::from(fortune) - 50.0) * 0.15;

    (base + insight_bonus + fortune_bonus + item_bonus).clamp(5.0, 95.0)
}

/// Chance of meeting an inner demon while breaking through from `realm`.
///
/// Zero below [`GameConfig::INNER_DEMON_FROM_REALM`]; otherwise
/// `min(30, (realm - 11) * 1.5) - (inner_calm - 50) * 0.2`, floored at 0.
pub fn inner_demon_chance(realm: usize, inner_calm: u8) -> f64 {
    if realm < GameConfig::INNER_DEMON_FROM_REALM {
        return 0.0;
    }

    let base = ((realm - 11) as f64 * 1.5).min(30.0);
    let calm_reduction = (f64::from(inner_calm) - 50.0) * 0.2;

    (base - calm_reduction).max(0.0)
}

/// Chance of resisting an inner demon once encountered (25%..75% over the attribute domain).
pub fn inner_demon_resist_chance(inner_calm: u8) -> f64 {
    50.0 + (f64::from(inner_calm) - 50.0) * 0.5
}

/// Tribulation parameters when breaking through from `realm`.
pub fn tribulation_difficulty(realm: usize) -> TribulationDifficulty {
    if realm < GameConfig::TRIBULATION_FROM_REALM {
        return TribulationDifficulty::NONE;
    }

    let depth = realm - GameConfig::TRIBULATION_FROM_REALM;
    TribulationDifficulty {
        waves: (depth / 5) as u32 + 3,
        base_damage: 1000.0 * 1.8_f64.powi(depth as i32),
        survivability: (80.0 - depth as f64).max(20.0),
    }
}

/// Chance of surviving a tribulation.
///
/// Inner calm scales survivability by 80%..100%, fortune by 90%..100%.
pub fn tribulation_pass_chance(
    difficulty: &TribulationDifficulty,
    inner_calm: u8,
    fortune: u8,
) -> f64 {
    difficulty.survivability
        * (0.8 + f64::from(inner_calm) / 500.0)
        * (0.9 + f64::from(fortune) / 1000.0)
}

/// Chance per event window that a random event occurs: `10 + fortune / 5`.
pub fn event_chance(fortune: u8) -> f64 {
    10.0 + f64::from(fortune) / 5.0
}

/// Victory percentage for a player/boss power ratio.
pub fn victory_chance(power_ratio: f64) -> u32 {
    if power_ratio > 1.5 {
        90
    } else if power_ratio > 1.2 {
        75
    } else if power_ratio > 1.0 {
        60
    } else if power_ratio > 0.8 {
        40
    } else if power_ratio > 0.6 {
        25
    } else {
        10
    }
}
