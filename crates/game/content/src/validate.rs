//! Load-time catalog checks.
//!
//! The engine assumes a well-formed catalog and only falls back quietly when it
//! is not. Loaders run [`validate_catalog`] so malformed content is rejected
//! before any resolver sees it.

use std::collections::HashSet;

use ascension_core::CatalogSnapshot;

/// Allowed distance between an outcome list's probability sum and 100.
pub const PROBABILITY_TOLERANCE: f64 = 0.01;

/// One problem found in a catalog.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("realm catalog is empty")]
    NoRealms,

    #[error("realm at position {position} has index {index}")]
    RealmIndexMismatch { position: usize, index: usize },

    #[error("duplicate boss id '{0}'")]
    DuplicateBoss(String),

    #[error("duplicate event id '{0}'")]
    DuplicateEvent(String),

    #[error("event '{event}' is available from realm {from} to {to}")]
    InvertedRange { event: String, from: usize, to: usize },

    #[error("event '{event}' has no choices")]
    NoChoices { event: String },

    #[error("choice '{choice}' of event '{event}' has no outcomes")]
    NoOutcomes { event: String, choice: String },

    #[error("choice '{choice}' of event '{event}' has probabilities summing to {sum}")]
    ProbabilitySum {
        event: String,
        choice: String,
        sum: f64,
    },
}

/// Checks every structural assumption the resolvers make about `catalog`.
///
/// Returns all issues found; an empty list means the catalog is usable.
pub fn validate_catalog(catalog: &CatalogSnapshot) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if catalog.realms.is_empty() {
        issues.push(CatalogIssue::NoRealms);
    }
    for (position, realm) in catalog.realms.iter().enumerate() {
        if realm.index != position {
            issues.push(CatalogIssue::RealmIndexMismatch {
                position,
                index: realm.index,
            });
        }
    }

    let mut boss_ids = HashSet::new();
    for boss in &catalog.bosses {
        if !boss_ids.insert(boss.id.as_str()) {
            issues.push(CatalogIssue::DuplicateBoss(boss.id.clone()));
        }
    }

    let mut event_ids = HashSet::new();
    for event in &catalog.events {
        if !event_ids.insert(event.id.as_str()) {
            issues.push(CatalogIssue::DuplicateEvent(event.id.clone()));
        }
        if event.available_from > event.available_to {
            issues.push(CatalogIssue::InvertedRange {
                event: event.id.clone(),
                from: event.available_from,
                to: event.available_to,
            });
        }
        if event.choices.is_empty() {
            issues.push(CatalogIssue::NoChoices {
                event: event.id.clone(),
            });
        }

        for choice in &event.choices {
            if choice.outcomes.is_empty() {
                issues.push(CatalogIssue::NoOutcomes {
                    event: event.id.clone(),
                    choice: choice.id.clone(),
                });
                continue;
            }
            let sum: f64 = choice.outcomes.iter().map(|outcome| outcome.probability).sum();
            if (sum - 100.0).abs() > PROBABILITY_TOLERANCE {
                issues.push(CatalogIssue::ProbabilitySum {
                    event: event.id.clone(),
                    choice: choice.id.clone(),
                    sum,
                });
            }
        }
    }

    issues
}
