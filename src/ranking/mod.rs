//! Deterministic vehicle ranking
//!
//! Matches a free-text query against an in-memory catalog without any
//! external inference service. Used directly and as the fallback when the
//! remote relevance service fails or returns nothing.

mod engine;
pub mod preferences;
pub mod scorer;
pub mod selector;

pub use engine::{rank, rank_detailed, rank_scored, RankSource, RankedVehicle, Ranking};
pub use preferences::{PreferenceCategory, PreferenceRule};
pub use scorer::ScoredCandidate;
pub use selector::{Selection, Tier};
