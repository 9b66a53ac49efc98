//! Settings structures for Vehicle-Match configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (VEHICLE_MATCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("VEHICLE_MATCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("VEHICLE_MATCH_CATALOG") {
            self.catalog.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("VEHICLE_MATCH_REMOTE_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.search.remote_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("VEHICLE_MATCH_CACHE_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.search.cache.enabled = enabled;
            }
        }
    }

    /// Log filter directive honoring the debug flag
    pub fn log_filter(&self) -> String {
        if self.general.debug {
            "vehicle_match=debug,info".to_string()
        } else {
            self.general.log_filter.clone()
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            log_filter: "vehicle_match=info".to_string(),
        }
    }
}

/// Search controller settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Remote relevance service timeout in seconds
    pub remote_timeout: f64,
    /// Maximum number of vehicles returned (none = unlimited)
    pub max_results: Option<usize>,
    /// Result cache
    pub cache: CacheSettings,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            remote_timeout: 3.0,
            max_results: None,
            cache: CacheSettings::default(),
        }
    }
}

/// Result cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl_seconds: u64,
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 300,
            max_capacity: 10_000,
        }
    }
}

/// Catalog source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON file holding the vehicle array
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.general.debug);
        assert_eq!(settings.search.remote_timeout, 3.0);
        assert!(settings.search.cache.enabled);
        assert!(settings.catalog.path.is_none());
        assert_eq!(settings.log_filter(), "vehicle_match=info");
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
general:
  debug: true
search:
  remote_timeout: 1.5
  cache:
    ttl_seconds: 60
catalog:
  path: data/catalog.json
"#;
        let settings = Settings::from_yaml_str(yaml).unwrap();
        assert!(settings.general.debug);
        assert_eq!(settings.search.remote_timeout, 1.5);
        assert_eq!(settings.search.cache.ttl_seconds, 60);
        assert_eq!(settings.search.cache.max_capacity, 10_000);
        assert_eq!(settings.catalog.path, Some(PathBuf::from("data/catalog.json")));
        assert_eq!(settings.log_filter(), "vehicle_match=debug,info");
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            Settings::from_yaml_str("search: [not, a, map"),
            Err(MatchError::Yaml(_))
        ));
        assert!(matches!(
            Settings::from_file("/nonexistent/vehicle-match/settings.yml"),
            Err(MatchError::Io(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "search:\n  max_results: 25\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.search.max_results, Some(25));
    }
}
