//! Vehicle-Match: natural-language vehicle matching and ranking
//!
//! Selects and orders vehicles from an in-memory marketplace catalog for a
//! free-text query ("family SUV under $25,000", "fast luxury car", "nsx")
//! without calling an external inference service. The same engine backs up
//! a remote relevance service when that service fails or returns nothing.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod query;
pub mod ranking;
pub mod search;

pub use catalog::{Catalog, Vehicle};
pub use config::Settings;
pub use error::{MatchError, Result};
pub use ranking::{rank, rank_detailed, rank_scored};
pub use search::{RelevanceService, SearchController, SearchOutcome, SearchRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
