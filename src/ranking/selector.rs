//! Tiered result selection
//!
//! Decides which scored candidates are shown, in priority order:
//!
//! | Tier               | Condition                          | Keep                       |
//! |--------------------|------------------------------------|----------------------------|
//! | `Empty`            | no candidates, or every score is 0 | nothing                    |
//! | `NoConfidentMatch` | top ≤ 5, 1–2 terms, top < 15       | nothing                    |
//! | `Strict`           | one term of ≤ 5 chars, top ≥ 70    | score ≥ max(top × 0.7, 50) |
//! | `Moderate`         | top ≥ 50                           | score ≥ max(top × 0.4, 20) |
//! | `Exploratory`      | otherwise                          | score > 5                  |
//!
//! These constants are product policy.

use super::scorer::ScoredCandidate;
use crate::query::ParsedQuery;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Top score at or below which a specific query is treated as unmatched
pub const NOISE_SCORE: f64 = 5.0;
/// A specific query also needs a top score below this to be dropped
pub const SPECIFIC_QUERY_MIN_CONFIDENCE: f64 = 15.0;

pub const STRICT_TOP_SCORE: f64 = 70.0;
pub const STRICT_RATIO: f64 = 0.7;
pub const STRICT_FLOOR: f64 = 50.0;

pub const MODERATE_TOP_SCORE: f64 = 50.0;
pub const MODERATE_RATIO: f64 = 0.4;
pub const MODERATE_FLOOR: f64 = 20.0;

/// Exploratory queries keep anything scoring above this
pub const EXPLORATORY_FLOOR: f64 = NOISE_SCORE;

/// Which selection policy applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Empty,
    NoConfidentMatch,
    Strict,
    Moderate,
    Exploratory,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NoConfidentMatch => "no_confident_match",
            Self::Strict => "strict",
            Self::Moderate => "moderate",
            Self::Exploratory => "exploratory",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidates kept by the selector, best first
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub tier: Tier,
    pub candidates: Vec<ScoredCandidate<'a>>,
}

#[derive(Debug, Clone, Copy)]
enum Cutoff {
    None,
    AtLeast(f64),
    Above(f64),
}

impl Cutoff {
    fn keeps(&self, score: f64) -> bool {
        match *self {
            Self::None => false,
            Self::AtLeast(min) => score >= min,
            Self::Above(min) => score > min,
        }
    }
}

/// Sort candidates best-first and apply the tiered cutoff.
///
/// Sorting is stable, so equal scores keep their catalog order.
pub fn select<'a>(mut candidates: Vec<ScoredCandidate<'a>>, query: &ParsedQuery) -> Selection<'a> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let top = candidates.first().map(|c| c.score).unwrap_or(0.0);

    let (tier, cutoff) = if top <= 0.0 {
        (Tier::Empty, Cutoff::None)
    } else if top <= NOISE_SCORE && query.is_specific() && top < SPECIFIC_QUERY_MIN_CONFIDENCE {
        (Tier::NoConfidentMatch, Cutoff::None)
    } else if query.is_single_short_term() && top >= STRICT_TOP_SCORE {
        (Tier::Strict, Cutoff::AtLeast((top * STRICT_RATIO).max(STRICT_FLOOR)))
    } else if top >= MODERATE_TOP_SCORE {
        (Tier::Moderate, Cutoff::AtLeast((top * MODERATE_RATIO).max(MODERATE_FLOOR)))
    } else {
        (Tier::Exploratory, Cutoff::Above(EXPLORATORY_FLOOR))
    };

    candidates.retain(|c| cutoff.keeps(c.score));

    Selection { tier, candidates }
}
