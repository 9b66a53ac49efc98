//! Local ranking entry point
//!
//! `query → alias resolver → (else) tokenizer → scorer → selector`.
//! Pure and synchronous: no I/O, no state between calls, the catalog is only
//! borrowed.

use super::scorer::{score, score_all, ScoredCandidate};
use super::selector::{select, Tier};
use crate::catalog::Vehicle;
use crate::query::{alias, ParsedQuery};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which path produced a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankSource {
    /// Empty query, catalog returned unchanged
    Identity,
    /// Answered by an alias short-circuit
    Alias,
    /// Scored and selected under the given tier
    Scored(Tier),
}

/// A returned vehicle with its score when one was computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedVehicle<'a> {
    pub vehicle: &'a Vehicle,
    pub score: Option<f64>,
}

/// Full ranking result
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    pub source: RankSource,
    pub results: Vec<RankedVehicle<'a>>,
}

impl<'a> Ranking<'a> {
    fn unscored(source: RankSource, vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Self {
        Self {
            source,
            results: vehicles
                .into_iter()
                .map(|vehicle| RankedVehicle {
                    vehicle,
                    score: None,
                })
                .collect(),
        }
    }

    fn scored(tier: Tier, candidates: Vec<ScoredCandidate<'a>>) -> Self {
        Self {
            source: RankSource::Scored(tier),
            results: candidates
                .into_iter()
                .map(|c| RankedVehicle {
                    vehicle: c.vehicle,
                    score: Some(c.score),
                })
                .collect(),
        }
    }

    /// Vehicles in ranked order
    pub fn vehicles(&self) -> Vec<&'a Vehicle> {
        self.results.iter().map(|r| r.vehicle).collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Rank a catalog against a free-text query
pub fn rank<'a>(query: &str, catalog: &'a [Vehicle]) -> Vec<&'a Vehicle> {
    rank_detailed(query, catalog).vehicles()
}

/// Rank and report every returned vehicle with its score.
///
/// Identity and alias results are not cut by the selector, but their score
/// is still computed here so callers can display or log it.
pub fn rank_scored<'a>(query: &str, catalog: &'a [Vehicle]) -> Vec<ScoredCandidate<'a>> {
    let parsed = ParsedQuery::parse(query);
    rank_detailed(query, catalog)
        .results
        .into_iter()
        .map(|r| ScoredCandidate {
            vehicle: r.vehicle,
            score: r.score.unwrap_or_else(|| score(&parsed, r.vehicle)),
        })
        .collect()
}

/// Rank and report how the result was produced
pub fn rank_detailed<'a>(query: &str, catalog: &'a [Vehicle]) -> Ranking<'a> {
    let parsed = ParsedQuery::parse(query);

    if parsed.is_empty() {
        return Ranking::unscored(RankSource::Identity, catalog);
    }

    if let Some(matches) = alias::resolve(&parsed.words, catalog) {
        return Ranking::unscored(RankSource::Alias, matches);
    }

    let candidates = score_all(&parsed, catalog);
    let selection = select(candidates, &parsed);

    debug!(
        "Query '{}' kept {} of {} vehicles ({} tier)",
        parsed.normalized,
        selection.candidates.len(),
        catalog.len(),
        selection.tier
    );

    Ranking::scored(selection.tier, selection.candidates)
}
