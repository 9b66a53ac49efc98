//! Search request and outcome models

use crate::catalog::Vehicle;
use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// A vehicle search request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,
    /// Maximum number of vehicles to return
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Set result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check if query is empty
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Where the returned ordering came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// Remote relevance service
    Remote,
    /// Local ranking engine
    Fallback,
    /// Result cache
    Cache,
}

impl ResultSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
            Self::Cache => "cache",
        }
    }
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one search call
#[derive(Debug)]
pub struct SearchOutcome {
    /// Vehicles in display order
    pub vehicles: Vec<Vehicle>,
    /// Which path produced them
    pub source: ResultSource,
    /// Why the remote service was skipped over, if it failed
    pub remote_error: Option<MatchError>,
    /// Wall time spent in the controller
    pub elapsed_ms: u64,
}

impl SearchOutcome {
    /// Ids of the returned vehicles
    pub fn ids(&self) -> Vec<&str> {
        self.vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
