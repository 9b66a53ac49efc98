//! Caching module for Vehicle-Match
//!
//! Remembers the ordered vehicle ids returned for a query against a given
//! catalog, so repeated keystroke searches skip the remote round trip.

use crate::config::CacheSettings;
use moka::future::Cache;
use std::time::Duration;

/// Cache of ranked vehicle ids
#[derive(Clone)]
pub struct RankCache {
    cache: Cache<String, Vec<String>>,
}

impl RankCache {
    /// Create a new cache with specified TTL
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { cache }
    }

    /// Create from settings, or `None` when caching is disabled
    pub fn from_settings(settings: &CacheSettings) -> Option<Self> {
        settings
            .enabled
            .then(|| Self::new(settings.ttl_seconds, settings.max_capacity))
    }

    /// Get cached ids
    pub async fn get(&self, key: &str) -> Option<Vec<String>> {
        self.cache.get(key).await
    }

    /// Store ids
    pub async fn set(&self, key: String, ids: Vec<String>) {
        self.cache.insert(key, ids).await;
    }
}

/// Generate a cache key for a query against a catalog fingerprint
pub fn query_cache_key(query: &str, catalog_fingerprint: &str) -> String {
    use sha2::{Digest, Sha256};

    let normalized = query.trim().to_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hasher.update([0u8]);
    hasher.update(catalog_fingerprint.as_bytes());

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rank_cache() {
        let cache = RankCache::new(60, 100);
        cache.set("k".to_string(), vec!["a".into(), "b".into()]).await;

        assert_eq!(cache.get("k").await, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(cache.get("missing").await.is_none());
    }

    #[test]
    fn test_disabled_cache() {
        let settings = CacheSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(RankCache::from_settings(&settings).is_none());
        assert!(RankCache::from_settings(&CacheSettings::default()).is_some());
    }

    #[test]
    fn test_cache_key_normalization() {
        assert_eq!(query_cache_key("NSX ", "fp"), query_cache_key("nsx", "fp"));
        assert_ne!(query_cache_key("nsx", "fp1"), query_cache_key("nsx", "fp2"));
        assert_ne!(query_cache_key("nsx", "fp"), query_cache_key("gtr", "fp"));
    }
}
