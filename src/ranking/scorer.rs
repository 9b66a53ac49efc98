//! Per-vehicle relevance scoring
//!
//! A vehicle's score is the sum of independent, non-negative signals:
//! - make/model lexical matches (dominant)
//! - description substring match
//! - feature substring matches
//! - preference-category bonuses (see [`super::preferences`])

use super::preferences::preference_score;
use crate::catalog::Vehicle;
use crate::query::ParsedQuery;

/// Whole query equals the model
pub const EXACT_QUERY_MODEL: f64 = 60.0;
/// Whole query equals the make
pub const EXACT_QUERY_MAKE: f64 = 55.0;
/// Term equals the make
pub const TERM_EQUALS_MAKE: f64 = 50.0;
/// Term is a substring of the make
pub const TERM_IN_MAKE: f64 = 30.0;
/// Term equals the model
pub const TERM_EQUALS_MODEL: f64 = 80.0;
/// Term is an iconic model name found as a model token
pub const ICONIC_MODEL: f64 = 90.0;
/// Term is a substring of the model
pub const TERM_IN_MODEL: f64 = 40.0;
/// Different terms hit make and model
pub const COMPOUND_BONUS: f64 = 20.0;
/// Flat bonus when any term appears in the description
pub const DESCRIPTION_MATCH: f64 = 5.0;
/// Bonus per feature containing a term
pub const FEATURE_MATCH: f64 = 3.0;

/// Model names distinctive enough that a lone token is a strong signal
pub const ICONIC_MODELS: &[&str] = &[
    "nsx", "gtr", "gt-r", "911", "corvette", "mustang", "camaro", "miata", "supra", "challenger",
    "charger", "viper", "wrangler", "bronco", "cayman", "boxster", "s2000", "integra", "wrx",
    "prius", "86", "brz", "rx-7", "mr2", "tacoma", "f-150",
];

/// A vehicle paired with its score for one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub vehicle: &'a Vehicle,
    pub score: f64,
}

/// Score every vehicle once, in catalog order
pub fn score_all<'a>(query: &ParsedQuery, vehicles: &'a [Vehicle]) -> Vec<ScoredCandidate<'a>> {
    vehicles
        .iter()
        .map(|vehicle| ScoredCandidate {
            vehicle,
            score: score(query, vehicle),
        })
        .collect()
}

/// Total relevance of a vehicle for a query
pub fn score(query: &ParsedQuery, vehicle: &Vehicle) -> f64 {
    lexical_score(query, vehicle)
        + description_score(query, vehicle)
        + feature_score(query, vehicle)
        + preference_score(query, vehicle)
}

/// Make/model matching
pub fn lexical_score(query: &ParsedQuery, vehicle: &Vehicle) -> f64 {
    let make = vehicle.make.to_lowercase();
    let model = vehicle.model.to_lowercase();
    let mut score = 0.0;

    if !query.normalized.is_empty() {
        if query.normalized == model {
            score += EXACT_QUERY_MODEL;
        } else if query.normalized == make {
            score += EXACT_QUERY_MAKE;
        }
    }

    let mut make_hits = Vec::new();
    let mut model_hits = Vec::new();

    for (i, term) in query.terms.iter().enumerate() {
        let term = term.as_str();

        if term == make {
            score += TERM_EQUALS_MAKE;
            make_hits.push(i);
        } else if make.contains(term) {
            score += TERM_IN_MAKE;
            make_hits.push(i);
        }

        if is_iconic(term) && model_has_token(&model, term) {
            score += ICONIC_MODEL;
            model_hits.push(i);
        } else if term == model {
            score += TERM_EQUALS_MODEL;
            model_hits.push(i);
        } else if model.contains(term) {
            score += TERM_IN_MODEL;
            model_hits.push(i);
        }
    }

    let compound = query.terms.len() > 1
        && make_hits
            .iter()
            .any(|m| model_hits.iter().any(|n| m != n));
    if compound {
        score += COMPOUND_BONUS;
    }

    score
}

/// Flat bonus if any term occurs in the description
pub fn description_score(query: &ParsedQuery, vehicle: &Vehicle) -> f64 {
    let description = vehicle.description().to_lowercase();
    if description.is_empty() {
        return 0.0;
    }
    if query.terms.iter().any(|t| description.contains(t.as_str())) {
        DESCRIPTION_MATCH
    } else {
        0.0
    }
}

/// Bonus for each feature that contains any term
pub fn feature_score(query: &ParsedQuery, vehicle: &Vehicle) -> f64 {
    let matching = vehicle
        .features
        .iter()
        .map(|f| f.to_lowercase())
        .filter(|f| query.terms.iter().any(|t| f.contains(t.as_str())))
        .count();
    matching as f64 * FEATURE_MATCH
}

fn is_iconic(term: &str) -> bool {
    ICONIC_MODELS.contains(&term)
}

/// Term is the whole model, one of its words, or the model without hyphens
fn model_has_token(model: &str, term: &str) -> bool {
    model == term
        || model.split_whitespace().any(|w| w == term)
        || model.replace('-', "") == term
}
