//! Breakthrough resolution.
//!
//! An attempt walks `RequirementCheck -> [InnerDemonTrial] -> [TribulationTrial] -> FinalRoll`
//! and stops at the first failing stage. Every path ends in a single
//! [`BreakthroughOutcome`]; the resolver never touches the player state itself.

use crate::config::GameConfig;
use crate::env::{OracleError, RealmDefinition, RealmOracle, RngOracle};
use crate::formula::{
    breakthrough_chance, breakthrough_rewards, inner_demon_chance, inner_demon_resist_chance,
    tribulation_difficulty, tribulation_pass_chance,
};
use crate::state::{Penalty, PlayerState, Rewards, StateDelta, percent_of, saturating_i64};

/// Share of progress lost to an inner demon.
const INNER_DEMON_PROGRESS_PERCENT: u64 = 15;
/// Inner calm lost to an inner demon.
const INNER_DEMON_CALM_LOSS: u8 = 10;
/// Share of progress lost to a tribulation.
const TRIBULATION_PROGRESS_PERCENT: u64 = 20;
/// Share of the breakthrough cost lost to a tribulation.
const TRIBULATION_COST_PERCENT: u64 = 50;

const INNER_DEMON_CALM_BONUS: i32 = 5;
const TRIBULATION_CALM_BONUS: i32 = 8;
const TRIBULATION_INSIGHT_BONUS: i32 = 3;

/// How far a player got through an optional trial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TrialState {
    #[default]
    NotEncountered,
    Passed,
    Failed,
}

impl TrialState {
    #[inline]
    pub fn encountered(self) -> bool {
        !matches!(self, Self::NotEncountered)
    }
}

/// Why a player cannot attempt a breakthrough right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ineligibility {
    /// Already standing on the last realm of the ladder.
    MaxRealm { realm: usize },
    Progress { required: u64, current: u64 },
    Currency { required: u64, current: u64 },
}

impl core::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MaxRealm { realm } => write!(f, "already at the highest realm ({realm})"),
            Self::Progress { required, current } => {
                write!(f, "insufficient progress: need {required}, have {current}")
            }
            Self::Currency { required, current } => {
                write!(f, "insufficient currency: need {required}, have {current}")
            }
        }
    }
}

/// Terminal state of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakthroughVerdict {
    Ascended { new_realm: usize },
    Ineligible(Ineligibility),
    InnerDemonFailed,
    TribulationFailed { waves: u32 },
    RollFailed,
}

/// Percentages rolled against during an attempt. `None` means the stage was never reached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialChances {
    pub inner_demon: Option<f64>,
    pub inner_demon_resist: Option<f64>,
    pub tribulation_pass: Option<f64>,
    pub success: Option<f64>,
}

/// Full trace of one breakthrough attempt.
///
/// Carries either `rewards` (on success) or `penalty` (on a failed trial or roll),
/// never both. Requirement failures carry neither.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakthroughOutcome {
    pub success: bool,
    pub verdict: BreakthroughVerdict,
    pub from_realm: usize,
    pub inner_demon: TrialState,
    pub tribulation: TrialState,
    pub chances: TrialChances,
    pub rewards: Option<Rewards>,
    /// Currency paid on success, netted against `rewards.currency`.
    pub cost: u64,
    pub penalty: Option<Penalty>,
    pub message: String,
    pub flavor: String,
}

impl BreakthroughOutcome {
    fn ineligible(from_realm: usize, reason: Ineligibility) -> Self {
        let (message, flavor) = match reason {
            Ineligibility::MaxRealm { .. } => (
                "Already at the highest realm.",
                "There is no path left above you. The heavens themselves fall silent.",
            ),
            Ineligibility::Progress { .. } => (
                "Insufficient progress to break through.",
                "Your foundation is unsteady. Forcing the gate now would only bring harm.",
            ),
            Ineligibility::Currency { .. } => (
                "Insufficient currency for the attempt.",
                "A breakthrough needs many elixirs. Gather more spirit stones first.",
            ),
        };
        Self {
            success: false,
            verdict: BreakthroughVerdict::Ineligible(reason),
            from_realm,
            inner_demon: TrialState::NotEncountered,
            tribulation: TrialState::NotEncountered,
            chances: TrialChances::default(),
            rewards: None,
            cost: 0,
            penalty: None,
            message: message.to_owned(),
            flavor: flavor.to_owned(),
        }
    }

    /// The main state change: realm, rewards net of cost, or the penalty.
    ///
    /// Ineligible attempts yield an empty delta.
    pub fn delta(&self) -> StateDelta {
        if let Some(penalty) = &self.penalty {
            return penalty.to_delta();
        }
        match (self.verdict, self.rewards) {
            (BreakthroughVerdict::Ascended { .. }, Some(rewards)) => {
                let net_currency =
                    saturating_i64(rewards.currency).saturating_sub(saturating_i64(self.cost));
                StateDelta::new()
                    .realm(1)
                    .progress(saturating_i64(rewards.progress))
                    .currency(net_currency)
                    .reputation(saturating_i64(rewards.reputation))
            }
            _ => StateDelta::new(),
        }
    }

    /// Trial bonuses granted on top of a success, applied after [`Self::delta`].
    pub fn bonus_deltas(&self) -> Vec<StateDelta> {
        if !self.success {
            return Vec::new();
        }

        let mut bonuses = Vec::new();
        if self.inner_demon == TrialState::Passed {
            bonuses.push(StateDelta::new().inner_calm(INNER_DEMON_CALM_BONUS));
        }
        if self.tribulation == TrialState::Passed {
            bonuses.push(
                StateDelta::new()
                    .inner_calm(TRIBULATION_CALM_BONUS)
                    .insight(TRIBULATION_INSIGHT_BONUS),
            );
        }
        bonuses
    }

    /// Applies the main delta and then every bonus, clamping after each step.
    pub fn apply_to(&self, player: &PlayerState) -> PlayerState {
        let next = player.apply(&self.delta());
        next.apply_all(&self.bonus_deltas())
    }
}

/// Read-only preview of the next breakthrough. Consumes no randomness.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakthroughCheck {
    pub from_realm: usize,
    /// Index of the realm the attempt would enter; `None` at the top of the ladder.
    pub target_realm: Option<usize>,
    /// Every unmet requirement, in check order.
    pub unmet: Vec<Ineligibility>,
    pub success_chance: f64,
    pub inner_demon_chance: f64,
    pub tribulation: bool,
}

impl BreakthroughCheck {
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.unmet.is_empty()
    }
}

fn current_and_target<'a, O>(
    player: &PlayerState,
    realms: &'a O,
) -> Result<Option<&'a RealmDefinition>, OracleError>
where
    O: RealmOracle + ?Sized,
{
    realms
        .realm(player.realm)
        .ok_or(OracleError::RealmNotFound(player.realm))?;
    Ok(realms.realm(player.realm + 1))
}

fn tribulation_flavor(waves: u32) -> String {
    match waves {
        0 => "Heavenly lightning crashes down. Your body cracks under the strikes.".to_owned(),
        1 => "A wave of heavenly lightning crashes down. Your body cracks under the strike."
            .to_owned(),
        n => format!(
            "{n} waves of heavenly lightning crash down. Your body cracks under the strikes."
        ),
    }
}

fn unmet_requirements(player: &PlayerState, target: &RealmDefinition) -> Vec<Ineligibility> {
    let requirements = &target.requirements;
    let mut unmet = Vec::new();
    if player.progress < requirements.progress {
        unmet.push(Ineligibility::Progress {
            required: requirements.progress,
            current: player.progress,
        });
    }
    if player.currency < requirements.currency {
        unmet.push(Ineligibility::Currency {
            required: requirements.currency,
            current: player.currency,
        });
    }
    unmet
}

/// Reports whether a breakthrough is possible and with what odds.
///
/// # Errors
///
/// Returns [`OracleError::RealmNotFound`] if the player's realm is not in the catalog.
pub fn check_breakthrough<O>(
    player: &PlayerState,
    realms: &O,
    item_bonus: f64,
) -> Result<BreakthroughCheck, OracleError>
where
    O: RealmOracle + ?Sized,
{
    let target = current_and_target(player, realms)?;
    let unmet = match target {
        Some(target) => unmet_requirements(player, target),
        None => vec![Ineligibility::MaxRealm {
            realm: player.realm,
        }],
    };

    Ok(BreakthroughCheck {
        from_realm: player.realm,
        target_realm: target.map(|realm| realm.index),
        unmet,
        success_chance: breakthrough_chance(
            player.realm,
            player.insight,
            player.fortune,
            item_bonus,
        ),
        inner_demon_chance: inner_demon_chance(player.realm, player.inner_calm),
        tribulation: target.is_some_and(|realm| realm.requirements.tribulation),
    })
}

/// Attempts to advance `player` one realm.
///
/// Requirement failures return before any randomness is drawn. Afterwards the
/// draws are, in order: inner-demon encounter and resist (from realm
/// [`GameConfig::INNER_DEMON_FROM_REALM`]), tribulation (if the target realm is
/// flagged), and the final roll.
///
/// # Errors
///
/// Returns [`OracleError::RealmNotFound`] if the player's realm is not in the catalog.
pub fn resolve_breakthrough<O, R>(
    player: &PlayerState,
    realms: &O,
    item_bonus: f64,
    rng: &mut R,
) -> Result<BreakthroughOutcome, OracleError>
where
    O: RealmOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    let from_realm = player.realm;
    let Some(target) = current_and_target(player, realms)? else {
        return Ok(BreakthroughOutcome::ineligible(
            from_realm,
            Ineligibility::MaxRealm { realm: from_realm },
        ));
    };
    if let Some(reason) = unmet_requirements(player, target).into_iter().next() {
        return Ok(BreakthroughOutcome::ineligible(from_realm, reason));
    }

    let cost = target.requirements.currency;
    let mut outcome = BreakthroughOutcome {
        success: false,
        verdict: BreakthroughVerdict::RollFailed,
        from_realm,
        inner_demon: TrialState::NotEncountered,
        tribulation: TrialState::NotEncountered,
        chances: TrialChances::default(),
        rewards: None,
        cost: 0,
        penalty: None,
        message: String::new(),
        flavor: String::new(),
    };

    if from_realm >= GameConfig::INNER_DEMON_FROM_REALM {
        let encounter = inner_demon_chance(from_realm, player.inner_calm);
        outcome.chances.inner_demon = Some(encounter);

        if rng.roll_percent() < encounter {
            let resist = inner_demon_resist_chance(player.inner_calm);
            outcome.chances.inner_demon_resist = Some(resist);

            if rng.roll_percent() < resist {
                outcome.inner_demon = TrialState::Passed;
            } else {
                outcome.inner_demon = TrialState::Failed;
                outcome.verdict = BreakthroughVerdict::InnerDemonFailed;
                outcome.penalty = Some(Penalty {
                    progress: percent_of(player.progress, INNER_DEMON_PROGRESS_PERCENT),
                    inner_calm: INNER_DEMON_CALM_LOSS,
                    ..Penalty::default()
                });
                outcome.message = "Breakthrough failed: an inner demon took hold.".to_owned();
                outcome.flavor = "\"You are not worthy...\" a voice whispers. Your mind \
                                  clouds over and your cultivation bleeds away."
                    .to_owned();
                return Ok(outcome);
            }
        }
    }

    if target.requirements.tribulation {
        let difficulty = tribulation_difficulty(from_realm);
        let pass = tribulation_pass_chance(&difficulty, player.inner_calm, player.fortune);
        outcome.chances.tribulation_pass = Some(pass);

        if rng.roll_percent() < pass {
            outcome.tribulation = TrialState::Passed;
        } else {
            outcome.tribulation = TrialState::Failed;
            outcome.verdict = BreakthroughVerdict::TribulationFailed {
                waves: difficulty.waves,
            };
            outcome.penalty = Some(Penalty {
                progress: percent_of(player.progress, TRIBULATION_PROGRESS_PERCENT),
                currency: percent_of(cost, TRIBULATION_COST_PERCENT),
                ..Penalty::default()
            });
            outcome.message = "The tribulation was too strong. Breakthrough failed.".to_owned();
            outcome.flavor = tribulation_flavor(difficulty.waves);
            return Ok(outcome);
        }
    }

    let chance = breakthrough_chance(from_realm, player.insight, player.fortune, item_bonus);
    outcome.chances.success = Some(chance);

    if rng.roll_percent() < chance {
        let new_realm = from_realm + 1;
        outcome.success = true;
        outcome.verdict = BreakthroughVerdict::Ascended { new_realm };
        outcome.rewards = Some(breakthrough_rewards(new_realm));
        outcome.cost = cost;
        outcome.message = format!("Breakthrough succeeded! Entered {}.", target.name);
        outcome.flavor = target.success_text.clone();
    } else {
        outcome.penalty = Some(Penalty {
            progress: percent_of(
                player.progress,
                GameConfig::FAILED_BREAKTHROUGH_PENALTY_PERCENT,
            ),
            currency: cost,
            ..Penalty::default()
        });
        outcome.message = "Breakthrough failed.".to_owned();
        outcome.flavor = "Your qi scatters at the last moment. The spirit stones you \
                          burned are gone."
            .to_owned();
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BreakthroughProfile, CatalogSnapshot, RealmRequirements, ScriptedRng};
    use crate::formula::Tier;
    use crate::state::Attribute;

    fn realm(index: usize, progress: u64, currency: u64, tribulation: bool) -> RealmDefinition {
        RealmDefinition {
            index,
            name: format!("Realm {index}"),
            description: String::new(),
            stage: "Test".to_owned(),
            tier: Tier::Early,
            requirements: RealmRequirements {
                progress,
                currency,
                tribulation,
                ..RealmRequirements::default()
            },
            breakthrough: BreakthroughProfile::default(),
            possible_events: Vec::new(),
            success_text: format!("You stand in realm {index}."),
        }
    }

    /// Ladder of `len` realms; every realm needs 100 progress and 50 currency.
    fn ladder(len: usize) -> CatalogSnapshot {
        let realms = (0..len)
            .map(|index| realm(index, 100, 50, false))
            .collect();
        CatalogSnapshot::new(realms, Vec::new(), Vec::new())
    }

    #[test]
    fn insufficient_progress_consumes_no_randomness() {
        let catalog = ladder(3);
        let player = PlayerState::new();
        let mut rng = ScriptedRng::new([0.0]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(!outcome.success);
        assert_eq!(
            outcome.verdict,
            BreakthroughVerdict::Ineligible(Ineligibility::Progress {
                required: 100,
                current: 0
            })
        );
        assert_eq!(outcome.message, "Insufficient progress to break through.");
        assert_eq!(rng.consumed(), 0);
        assert!(outcome.delta().is_empty());
        assert_eq!(outcome.apply_to(&player), player);
    }

    #[test]
    fn insufficient_currency_has_its_own_message() {
        let catalog = ladder(3);
        let player = PlayerState::new().with_progress(150).with_currency(10);
        let mut rng = ScriptedRng::new([0.0]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(matches!(
            outcome.verdict,
            BreakthroughVerdict::Ineligible(Ineligibility::Currency { .. })
        ));
        assert_eq!(outcome.message, "Insufficient currency for the attempt.");
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn realm_zero_with_enough_progress_ascends() {
        let catalog = ladder(3);
        let player = PlayerState::new().with_progress(150);
        // Chance is capped at 95, so roll below it
        let mut rng = ScriptedRng::new([0.5]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.verdict, BreakthroughVerdict::Ascended { new_realm: 1 });
        assert_eq!(outcome.inner_demon, TrialState::NotEncountered);
        assert_eq!(outcome.tribulation, TrialState::NotEncountered);
        assert_eq!(outcome.chances.success, Some(95.0));
        // Only the final roll was drawn
        assert_eq!(rng.consumed(), 1);

        let rewards = breakthrough_rewards(1);
        let next = outcome.apply_to(&player);
        assert_eq!(next.realm, 1);
        assert_eq!(next.progress, 150 + rewards.progress);
        assert_eq!(next.currency, 1000 + rewards.currency - 50);
        assert_eq!(next.reputation, rewards.reputation);
    }

    #[test]
    fn final_roll_failure_costs_progress_and_full_cost() {
        let catalog = ladder(3);
        let player = PlayerState::new().with_progress(1000);
        let mut rng = ScriptedRng::new([0.99]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.verdict, BreakthroughVerdict::RollFailed);
        assert!(outcome.rewards.is_none());
        let penalty = outcome.penalty.unwrap();
        assert_eq!(penalty.progress, 100);
        assert_eq!(penalty.currency, 50);

        let next = outcome.apply_to(&player);
        assert_eq!(next.progress, 900);
        assert_eq!(next.currency, 950);
        assert_eq!(next.realm, 0);
    }

    #[test]
    fn top_of_ladder_is_not_an_error() {
        let catalog = ladder(2);
        let player = PlayerState::new().with_realm(1).with_progress(1_000_000);
        let mut rng = ScriptedRng::new([0.0]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert_eq!(
            outcome.verdict,
            BreakthroughVerdict::Ineligible(Ineligibility::MaxRealm { realm: 1 })
        );
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn realm_outside_catalog_is_rejected() {
        let catalog = ladder(2);
        let player = PlayerState::new().with_realm(5);
        let mut rng = ScriptedRng::new([0.0]);

        let error = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap_err();
        assert_eq!(error, OracleError::RealmNotFound(5));
    }

    #[test]
    fn inner_demon_skipped_when_roll_above_chance() {
        let catalog = ladder(25);
        let player = PlayerState::new()
            .with_realm(20)
            .with_progress(10_000)
            .with_attribute(Attribute::InnerCalm, 80);
        // 7.6 >= 7.5: no demon; then the final roll at 10 succeeds
        let mut rng = ScriptedRng::new([0.076, 0.10]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert_eq!(outcome.chances.inner_demon, Some(7.5));
        assert_eq!(outcome.inner_demon, TrialState::NotEncountered);
        assert!(outcome.success);
        assert_eq!(rng.consumed(), 2);
        assert!(outcome.bonus_deltas().is_empty());
    }

    #[test]
    fn inner_demon_failure_costs_calm_not_currency() {
        let catalog = ladder(25);
        let player = PlayerState::new().with_realm(20).with_progress(1000);
        // Encounter (0 < 13.5), then fail resist (90 >= 50)
        let mut rng = ScriptedRng::new([0.0, 0.9]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert_eq!(outcome.verdict, BreakthroughVerdict::InnerDemonFailed);
        assert_eq!(outcome.inner_demon, TrialState::Failed);
        assert_eq!(rng.consumed(), 2);

        let next = outcome.apply_to(&player);
        assert_eq!(next.progress, 850);
        assert_eq!(next.inner_calm, 40);
        assert_eq!(next.currency, player.currency);
    }

    #[test]
    fn passed_inner_demon_grants_calm_bonus() {
        let catalog = ladder(25);
        let player = PlayerState::new().with_realm(20).with_progress(1000);
        let mut rng = ScriptedRng::new([0.0, 0.0, 0.0]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.inner_demon, TrialState::Passed);
        let next = outcome.apply_to(&player);
        assert_eq!(next.inner_calm, 55);
    }

    #[test]
    fn tribulation_failure_costs_half_the_price() {
        let mut catalog = ladder(3);
        catalog.realms[1] = realm(1, 100, 400, true);
        let player = PlayerState::new().with_progress(1000);
        let mut rng = ScriptedRng::new([0.999]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(matches!(
            outcome.verdict,
            BreakthroughVerdict::TribulationFailed { .. }
        ));
        assert_eq!(outcome.tribulation, TrialState::Failed);
        let penalty = outcome.penalty.unwrap();
        assert_eq!(penalty.progress, 200);
        assert_eq!(penalty.currency, 200);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn tribulation_flavor_agrees_with_reported_waves() {
        // Flagged below the tribulation era: no waves to count
        let mut catalog = ladder(3);
        catalog.realms[1] = realm(1, 100, 50, true);
        let player = PlayerState::new().with_progress(1000);
        let mut rng = ScriptedRng::new([0.999]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert_eq!(
            outcome.verdict,
            BreakthroughVerdict::TribulationFailed { waves: 0 }
        );
        assert!(!outcome.flavor.contains("waves"));

        let mut catalog = ladder(50);
        catalog.realms[43] = realm(43, 100, 50, true);
        let player = PlayerState::new().with_realm(42).with_progress(1000);
        // No inner demon (99.9 >= 30), then fail the tribulation
        let mut rng = ScriptedRng::new([0.999, 0.999]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert_eq!(
            outcome.verdict,
            BreakthroughVerdict::TribulationFailed { waves: 3 }
        );
        assert!(outcome.flavor.starts_with("3 waves of heavenly lightning"));
    }

    #[test]
    fn both_trials_passed_grant_both_bonuses() {
        let mut catalog = ladder(50);
        catalog.realms[43] = realm(43, 100, 50, true);
        let player = PlayerState::new()
            .with_realm(42)
            .with_progress(1000)
            .with_attribute(Attribute::InnerCalm, 90);
        // Encounter (0 < 22), resist (0 < 70), tribulation (0 < 74.5), final roll (0 < 50)
        let mut rng = ScriptedRng::new([0.0, 0.0, 0.0, 0.0]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.inner_demon, TrialState::Passed);
        assert_eq!(outcome.tribulation, TrialState::Passed);
        assert_eq!(rng.consumed(), 4);
        assert_eq!(
            outcome.bonus_deltas(),
            vec![
                StateDelta::new().inner_calm(5),
                StateDelta::new().inner_calm(8).insight(3),
            ]
        );

        // 90 + 5 = 95, then 95 + 8 clamps to 100
        let next = outcome.apply_to(&player);
        assert_eq!(next.realm, 43);
        assert_eq!(next.inner_calm, 100);
        assert_eq!(next.insight, 53);
    }

    #[test]
    fn passed_tribulation_grants_calm_and_insight() {
        let mut catalog = ladder(3);
        catalog.realms[1] = realm(1, 100, 50, true);
        let player = PlayerState::new().with_progress(1000);
        let mut rng = ScriptedRng::new([0.0, 0.0]);

        let outcome = resolve_breakthrough(&player, &catalog, 0.0, &mut rng).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.tribulation, TrialState::Passed);
        let next = outcome.apply_to(&player);
        assert_eq!(next.inner_calm, 58);
        assert_eq!(next.insight, 53);
    }

    #[test]
    fn check_lists_every_unmet_requirement() {
        let catalog = ladder(3);
        let player = PlayerState::new().with_currency(0);

        let check = check_breakthrough(&player, &catalog, 0.0).unwrap();

        assert!(!check.is_eligible());
        assert_eq!(check.target_realm, Some(1));
        assert_eq!(check.unmet.len(), 2);
        assert_eq!(
            check.unmet[1].to_string(),
            "insufficient currency: need 50, have 0"
        );
        assert!(!check.tribulation);
    }

    #[test]
    fn check_at_top_reports_max_realm() {
        let catalog = ladder(1);
        let check = check_breakthrough(&PlayerState::new(), &catalog, 0.0).unwrap();
        assert_eq!(check.target_realm, None);
        assert_eq!(check.unmet, vec![Ineligibility::MaxRealm { realm: 0 }]);
    }
}
