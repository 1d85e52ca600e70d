//! Curve formulas.
//!
//! Pure numeric functions mapping a realm index (and sometimes player attributes)
//! to progress thresholds, percentages, costs and rewards. Every resolver reads from
//! here; nothing here reads state or draws randomness.
//!
//! # Conventions
//!
//! - Percentages are `f64` in `[0, 100]` unless the function says otherwise
//! - Floors truncate toward zero; all floored inputs are non-negative
//! - Realm indices are `usize` positions in the realm catalog
//!
//! # Core Functions
//!
//! - [`required_progress`]: stage-band exponential curve
//! - [`base_success_rate`]: 20-step breakthrough ladder
//! - [`breakthrough_chance`]: base rate adjusted by insight, fortune and items
//! - [`inner_demon_chance`] / [`tribulation_difficulty`]: sub-trial curves
//! - [`cultivation_speed`] / [`cultivation_currency_reward`]: session yields

mod chance;
mod cultivation;
mod realm;

pub use chance::{
    TribulationDifficulty, breakthrough_chance, event_chance, inner_demon_chance,
    inner_demon_resist_chance, tribulation_difficulty, tribulation_pass_chance, victory_chance,
};
pub use cultivation::{cultivation_currency_reward, cultivation_speed};
pub use realm::{
    STAGE_BANDS, StageBand, Tier, base_success_rate, breakthrough_cost, breakthrough_rewards,
    required_progress, stage_band,
};
