//! Error types for catalog and settings loading and the search controller

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Duplicate vehicle id in catalog: {id}")]
    DuplicateVehicle { id: String },

    #[error("Relevance service {service} failed: {message}")]
    Remote { service: String, message: String },

    #[error("Relevance service {service} timed out")]
    Timeout { service: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
