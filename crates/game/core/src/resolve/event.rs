//! Random-event selection and choice resolution.
//!
//! Resolution happens in two stages: [`select_event`] picks an event the player's
//! realm allows, weighted by fortune; [`resolve_event`] turns one of its choices
//! into a single weighted outcome.

use crate::env::{
    EventChoice, EventOracle, EventOutcomeDefinition, OutcomeEffects, RandomEventDefinition,
    RngOracle, UnmetRequirement,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{PlayerState, StateDelta};

/// Maximum shift (in percentage points) fortune applies to an outcome draw.
const FORTUNE_DRAW_SHIFT: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventError {
    #[error("event '{event}' has no choice '{choice}'")]
    ChoiceNotFound { event: String, choice: String },

    #[error("choice '{choice}' of event '{event}' has no outcomes")]
    NoOutcomes { event: String, choice: String },
}

impl GameError for EventError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ChoiceNotFound { .. } => ErrorSeverity::Validation,
            Self::NoOutcomes { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ChoiceNotFound { .. } => "EVENT_CHOICE_NOT_FOUND",
            Self::NoOutcomes { .. } => "EVENT_NO_OUTCOMES",
        }
    }
}

/// Selection weight of `event` for a player with `fortune`. Never negative.
pub fn event_weight(event: &RandomEventDefinition, fortune: u8) -> f64 {
    let fortune_shift = (f64::from(fortune) - 50.0) / 50.0;
    (event.trigger_chance * (1.0 + event.fortune_modifier * fortune_shift)).max(0.0)
}

/// Picks one event available at the player's realm.
///
/// A draw in `[0, total_weight)` is scanned against the cumulative weights in
/// catalog order; the first event whose cumulative weight reaches the draw wins.
/// Returns `None` without drawing when nothing is available, and the first
/// available event without drawing when no event carries weight.
pub fn select_event<'a, O, R>(
    player: &PlayerState,
    events: &'a O,
    rng: &mut R,
) -> Option<&'a RandomEventDefinition>
where
    O: EventOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    let weighted: Vec<(&RandomEventDefinition, f64)> = events
        .events()
        .iter()
        .filter(|event| event.is_available_at(player.realm))
        .map(|event| (event, event_weight(event, player.fortune)))
        .collect();

    let first = weighted.first()?.0;
    let total: f64 = weighted.iter().map(|(_, weight)| weight).sum();
    if total <= 0.0 {
        return Some(first);
    }

    let draw = rng.unit() * total;
    let mut cumulative = 0.0;
    let mut last_weighted = first;
    for &(event, weight) in &weighted {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last_weighted = event;
        if draw <= cumulative {
            return Some(event);
        }
    }
    // Rounding can leave the draw just past the final cumulative weight
    Some(last_weighted)
}

/// A choice the player can see but not pick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockedChoice {
    pub id: String,
    pub text: String,
    pub reason: UnmetRequirement,
}

/// An event as presented to a specific player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreparedEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Choices whose requirements the player meets, in catalog order.
    pub choices: Vec<EventChoice>,
    pub locked: Vec<LockedChoice>,
}

impl PreparedEvent {
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Splits an event's choices into the ones `player` may pick and the locked rest.
pub fn prepare_event(player: &PlayerState, event: &RandomEventDefinition) -> PreparedEvent {
    let mut choices = Vec::new();
    let mut locked = Vec::new();
    for choice in &event.choices {
        match choice.requirements.first_unmet(player) {
            None => choices.push(choice.clone()),
            Some(reason) => locked.push(LockedChoice {
                id: choice.id.clone(),
                text: choice.text.clone(),
                reason,
            }),
        }
    }

    PreparedEvent {
        id: event.id.clone(),
        name: event.name.clone(),
        description: event.description.clone(),
        choices,
        locked,
    }
}

/// Index of the outcome a `draw` in `[0, 100]` lands on.
///
/// The first outcome whose cumulative probability reaches the draw wins. If the
/// probabilities sum to less than the draw, the last outcome is used.
pub fn select_outcome(outcomes: &[EventOutcomeDefinition], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (index, outcome) in outcomes.iter().enumerate() {
        cumulative += outcome.probability;
        if draw <= cumulative {
            return Some(index);
        }
    }
    outcomes.len().checked_sub(1)
}

/// The outcome a resolved choice landed on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventOutcome {
    pub event_id: String,
    pub choice_id: String,
    pub outcome_index: usize,
    /// Fortune-adjusted draw in `[0, 100]`.
    pub draw: f64,
    pub description: String,
    pub flavor: String,
    pub effects: OutcomeEffects,
}

/// Result of resolving an event choice.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventResolution {
    Resolved(EventOutcome),
    /// The player does not meet the choice's requirements. Nothing changes.
    Ineligible {
        event_id: String,
        choice_id: String,
        reason: UnmetRequirement,
    },
}

impl EventResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Named reward to relay, if the outcome grants one.
    pub fn special_reward(&self) -> Option<&str> {
        match self {
            Self::Resolved(outcome) => outcome.effects.special_reward.as_deref(),
            Self::Ineligible { .. } => None,
        }
    }

    pub fn delta(&self) -> StateDelta {
        match self {
            Self::Resolved(outcome) => outcome.effects.to_delta(),
            Self::Ineligible { .. } => StateDelta::new(),
        }
    }

    pub fn apply_to(&self, player: &PlayerState) -> PlayerState {
        player.apply(&self.delta())
    }
}

/// Resolves `choice_id` of `event` for `player`.
///
/// An unmet requirement is a normal [`EventResolution::Ineligible`] result and
/// draws nothing. Otherwise one percentage draw, shifted by up to ±10 points
/// of fortune, selects the outcome.
///
/// # Errors
///
/// - [`EventError::ChoiceNotFound`] if the event has no such choice.
/// - [`EventError::NoOutcomes`] if the choice lists no outcomes.
pub fn resolve_event<R>(
    player: &PlayerState,
    event: &RandomEventDefinition,
    choice_id: &str,
    rng: &mut R,
) -> Result<EventResolution, EventError>
where
    R: RngOracle + ?Sized,
{
    let choice = event
        .choice(choice_id)
        .ok_or_else(|| EventError::ChoiceNotFound {
            event: event.id.clone(),
            choice: choice_id.to_owned(),
        })?;

    if let Some(reason) = choice.requirements.first_unmet(player) {
        return Ok(EventResolution::Ineligible {
            event_id: event.id.clone(),
            choice_id: choice.id.clone(),
            reason,
        });
    }
    if choice.outcomes.is_empty() {
        return Err(EventError::NoOutcomes {
            event: event.id.clone(),
            choice: choice.id.clone(),
        });
    }

    let fortune_shift = (f64::from(player.fortune) - 50.0) / 100.0 * FORTUNE_DRAW_SHIFT;
    let draw = (rng.roll_percent() + fortune_shift).clamp(0.0, 100.0);
    let index = select_outcome(&choice.outcomes, draw).unwrap_or_default();
    let outcome = &choice.outcomes[index];

    Ok(EventResolution::Resolved(EventOutcome {
        event_id: event.id.clone(),
        choice_id: choice.id.clone(),
        outcome_index: index,
        draw,
        description: outcome.description.clone(),
        flavor: outcome.flavor.clone(),
        effects: outcome.effects.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogSnapshot, ChoiceRequirements, ScriptedRng};
    use crate::state::Attribute;

    fn outcome(probability: f64, progress: i64) -> EventOutcomeDefinition {
        EventOutcomeDefinition {
            probability,
            description: format!("gain {progress}"),
            effects: OutcomeEffects {
                progress,
                ..OutcomeEffects::default()
            },
            flavor: String::new(),
        }
    }

    fn event(id: &str, from: usize, to: usize, trigger_chance: f64) -> RandomEventDefinition {
        RandomEventDefinition {
            id: id.to_owned(),
            name: id.to_owned(),
            description: String::new(),
            available_from: from,
            available_to: to,
            trigger_chance,
            fortune_modifier: 0.5,
            choices: vec![
                EventChoice {
                    id: "explore".to_owned(),
                    text: "Explore".to_owned(),
                    requirements: ChoiceRequirements::default(),
                    outcomes: vec![outcome(30.0, 100), outcome(70.0, 10)],
                },
                EventChoice {
                    id: "bribe".to_owned(),
                    text: "Bribe the guardian".to_owned(),
                    requirements: ChoiceRequirements {
                        currency: Some(5000),
                        ..ChoiceRequirements::default()
                    },
                    outcomes: vec![outcome(100.0, 500)],
                },
                EventChoice {
                    id: "empty".to_owned(),
                    text: "Do nothing".to_owned(),
                    requirements: ChoiceRequirements::default(),
                    outcomes: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn draw_selects_by_cumulative_weight() {
        let cave = event("cave", 0, 10, 10.0);
        let player = PlayerState::new();

        let low = resolve_event(&player, &cave, "explore", &mut ScriptedRng::new([0.29])).unwrap();
        let high = resolve_event(&player, &cave, "explore", &mut ScriptedRng::new([0.31])).unwrap();

        match (low, high) {
            (EventResolution::Resolved(low), EventResolution::Resolved(high)) => {
                assert_eq!(low.outcome_index, 0);
                assert_eq!(high.outcome_index, 1);
            }
            other => panic!("expected two resolved outcomes, got {other:?}"),
        }
    }

    #[test]
    fn fortune_shifts_the_draw() {
        let cave = event("cave", 0, 10, 10.0);
        // +10 points at fortune 100 pushes a raw 25 past the first bucket
        let lucky = PlayerState::new().with_attribute(Attribute::Fortune, 100);

        let resolution =
            resolve_event(&lucky, &cave, "explore", &mut ScriptedRng::new([0.25])).unwrap();

        let EventResolution::Resolved(outcome) = resolution else {
            panic!("expected a resolved outcome");
        };
        assert_eq!(outcome.outcome_index, 1);
        assert!((outcome.draw - 35.0).abs() < 1e-9);
    }

    #[test]
    fn short_probability_sum_falls_back_to_last() {
        let outcomes = vec![outcome(10.0, 1), outcome(20.0, 2)];
        assert_eq!(select_outcome(&outcomes, 50.0), Some(1));
        assert_eq!(select_outcome(&outcomes, 10.0), Some(0));
        assert_eq!(select_outcome(&[], 50.0), None);
    }

    #[test]
    fn unmet_requirement_is_not_an_error() {
        let cave = event("cave", 0, 10, 10.0);
        let player = PlayerState::new();
        let mut rng = ScriptedRng::new([0.5]);

        let resolution = resolve_event(&player, &cave, "bribe", &mut rng).unwrap();

        assert!(!resolution.is_resolved());
        assert!(resolution.delta().is_empty());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn unknown_choice_and_empty_outcomes_are_errors() {
        let cave = event("cave", 0, 10, 10.0);
        let player = PlayerState::new();
        let mut rng = ScriptedRng::default();

        let missing = resolve_event(&player, &cave, "fly", &mut rng).unwrap_err();
        assert_eq!(missing.error_code(), "EVENT_CHOICE_NOT_FOUND");

        let empty = resolve_event(&player, &cave, "empty", &mut rng).unwrap_err();
        assert_eq!(empty.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn prepared_event_locks_unaffordable_choices() {
        let cave = event("cave", 0, 10, 10.0);
        let prepared = prepare_event(&PlayerState::new(), &cave);

        let open: Vec<&str> = prepared.choices.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(open, vec!["explore", "empty"]);
        assert_eq!(prepared.locked.len(), 1);
        assert_eq!(prepared.locked[0].id, "bribe");
        assert!(prepared.has_choices());
    }

    #[test]
    fn selection_respects_realm_range() {
        let catalog = CatalogSnapshot::default().with_events(vec![
            event("early", 0, 5, 10.0),
            event("late", 10, 20, 10.0),
        ]);
        let player = PlayerState::new().with_realm(12);

        let selected = select_event(&player, &catalog, &mut ScriptedRng::new([0.0])).unwrap();
        assert_eq!(selected.id, "late");

        let nowhere = PlayerState::new().with_realm(7);
        let mut rng = ScriptedRng::default();
        assert!(select_event(&nowhere, &catalog, &mut rng).is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn selection_walks_cumulative_weights() {
        let catalog = CatalogSnapshot::default().with_events(vec![
            event("a", 0, 5, 10.0),
            event("b", 0, 5, 30.0),
        ]);
        let player = PlayerState::new();

        let pick = |unit: f64| {
            select_event(&player, &catalog, &mut ScriptedRng::new([unit]))
                .map(|event| event.id.clone())
        };
        // total 40: [0, 10] -> a, (10, 40) -> b
        assert_eq!(pick(0.2).as_deref(), Some("a"));
        assert_eq!(pick(0.3).as_deref(), Some("b"));
        assert_eq!(pick(0.99).as_deref(), Some("b"));
    }

    #[test]
    fn draw_on_a_boundary_goes_to_the_earlier_event() {
        let catalog = CatalogSnapshot::default().with_events(vec![
            event("a", 0, 5, 10.0),
            event("b", 0, 5, 30.0),
        ]);
        // 0.25 * 40 lands exactly on a's cumulative weight
        let mut rng = ScriptedRng::new([0.25]);

        let picked = select_event(&PlayerState::new(), &catalog, &mut rng).unwrap();

        assert_eq!(picked.id, "a");
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn weightless_catalog_picks_first_available() {
        let catalog = CatalogSnapshot::default().with_events(vec![
            event("a", 0, 5, 0.0),
            event("b", 0, 5, -3.0),
        ]);
        let mut rng = ScriptedRng::default();

        let selected = select_event(&PlayerState::new(), &catalog, &mut rng).unwrap();

        assert_eq!(selected.id, "a");
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn fortune_bends_event_weight() {
        let cave = event("cave", 0, 10, 10.0);
        assert!((event_weight(&cave, 50) - 10.0).abs() < 1e-9);
        // 10 * (1 + 0.5 * 1)
        assert!((event_weight(&cave, 100) - 15.0).abs() < 1e-9);
    }
}
