//! Default realm ladder built from the curve formulas.

use ascension_core::formula::{
    base_success_rate, breakthrough_cost, breakthrough_rewards, inner_demon_chance,
    required_progress, stage_band,
};
use ascension_core::{BreakthroughProfile, GameConfig, RealmDefinition, RealmRequirements, Tier};

/// Number of realms in the generated ladder (indices `0..=99`).
pub const GENERATED_REALM_COUNT: usize = 100;

/// Inner calm assumed when quoting the inner-demon chance in the catalog.
const REFERENCE_INNER_CALM: u8 = 50;

/// Builds the definition of a single realm.
pub fn generate_realm(index: usize) -> RealmDefinition {
    let (stage, offset) = stage_band(index)
        .map(|band| (band.name, band.offset(index)))
        .unwrap_or(("Unknown", 0));
    let tier = Tier::from_offset(offset);

    let name = match index {
        0 => stage.to_owned(),
        _ if offset > 4 => format!("{stage} ({tier} +{})", offset - 4),
        _ => format!("{stage} ({tier})"),
    };
    let tribulation = index >= GameConfig::TRIBULATION_FROM_REALM;

    let mut failure_risks = vec!["Lose part of your progress".to_owned()];
    if index > GameConfig::INNER_DEMON_FROM_REALM {
        failure_risks.push("Inner demon".to_owned());
    }
    if tribulation {
        failure_risks.push("Heavenly tribulation".to_owned());
    }

    RealmDefinition {
        index,
        description: format!("Realm {index} of the path: {stage}, {tier} stage."),
        stage: stage.to_owned(),
        tier,
        requirements: RealmRequirements {
            progress: required_progress(index),
            currency: breakthrough_cost(index),
            tribulation,
            ..RealmRequirements::default()
        },
        breakthrough: BreakthroughProfile {
            base_success_rate: base_success_rate(index),
            inner_demon_chance: inner_demon_chance(index, REFERENCE_INNER_CALM),
            failure_risks,
            reward_on_success: breakthrough_rewards(index),
        },
        possible_events: Vec::new(),
        success_text: format!("The barrier shatters. You have reached {name}."),
        name,
    }
}

/// Builds the full ladder, indices `0..GENERATED_REALM_COUNT`.
pub fn generate_realms() -> Vec<RealmDefinition> {
    (0..GENERATED_REALM_COUNT).map(generate_realm).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_indexed_in_order() {
        let realms = generate_realms();
        assert_eq!(realms.len(), 100);
        for (position, realm) in realms.iter().enumerate() {
            assert_eq!(realm.index, position);
        }
    }

    #[test]
    fn names_follow_stage_and_tier() {
        assert_eq!(generate_realm(0).name, "Mortal");
        assert_eq!(generate_realm(1).name, "Qi Refining (Early)");
        assert_eq!(generate_realm(5).name, "Qi Refining (Perfected)");
        assert_eq!(generate_realm(6).name, "Qi Refining (Perfected +1)");
        assert_eq!(generate_realm(12).stage, "Golden Core");
        assert_eq!(generate_realm(14).tier, Tier::Late);
    }

    #[test]
    fn tribulation_starts_at_forty_two() {
        assert!(!generate_realm(41).requirements.tribulation);
        assert!(generate_realm(42).requirements.tribulation);
        assert!(generate_realm(99).requirements.tribulation);
    }

    #[test]
    fn requirements_come_from_formulas() {
        let realm = generate_realm(7);
        assert_eq!(realm.requirements.progress, 1_000);
        assert_eq!(realm.requirements.currency, breakthrough_cost(7));
        assert_eq!(realm.breakthrough.base_success_rate, 85);
        assert_eq!(realm.breakthrough.reward_on_success, breakthrough_rewards(7));
        assert_eq!(generate_realm(0).requirements.progress, 0);
    }
}
