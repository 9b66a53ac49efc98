//! Search execution with remote-first, local-fallback ordering

use super::models::{ResultSource, SearchOutcome, SearchRequest};
use super::traits::RelevanceService;
use crate::cache::{query_cache_key, RankCache};
use crate::catalog::{Catalog, Vehicle};
use crate::config::SearchSettings;
use crate::error::MatchError;
use crate::metrics::Metrics;
use crate::ranking;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Used when the configured timeout is not a usable duration
const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(3);

/// Coordinates the remote relevance service and the local ranking engine.
///
/// There is no cancellation: when a newer query supersedes an in-flight one,
/// the caller discards the stale outcome.
pub struct SearchController {
    /// Optional remote relevance service
    remote: Option<Arc<dyn RelevanceService>>,
    /// Remote call timeout
    remote_timeout: Duration,
    /// Default result cap
    max_results: Option<usize>,
    /// Ranked-id cache
    cache: Option<RankCache>,
    metrics: Arc<Metrics>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    /// Local-only controller without a cache
    pub fn new() -> Self {
        Self {
            remote: None,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
            max_results: None,
            cache: None,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Create a controller from settings
    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self {
            remote: None,
            remote_timeout: remote_timeout(settings.remote_timeout),
            max_results: settings.max_results,
            cache: RankCache::from_settings(&settings.cache),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Set the remote relevance service
    pub fn with_remote(mut self, service: Arc<dyn RelevanceService>) -> Self {
        self.remote = Some(service);
        self
    }

    /// Set remote timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    /// Set result cache
    pub fn with_cache(mut self, cache: RankCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Shared metrics handle
    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }

    /// Execute a search against the catalog
    pub async fn execute(&self, request: &SearchRequest, catalog: &Catalog) -> SearchOutcome {
        let start = Instant::now();
        self.metrics.inc_search();

        let limit = request.limit.or(self.max_results);
        let cache_key = self
            .cache
            .as_ref()
            .map(|_| query_cache_key(&request.query, &catalog.fingerprint()));

        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(ids) = cache.get(key).await {
                debug!("Cache hit for query '{}'", request.query);
                self.metrics.record_cache_hit();
                let vehicles = map_ids(&ids, catalog);
                return finish(vehicles, ResultSource::Cache, None, limit, start);
            }
        }

        let remote = match &self.remote {
            Some(service) if !request.is_empty() => {
                Some(self.search_remote(service.as_ref(), &request.query, catalog).await)
            }
            _ => None,
        };

        let (source, vehicles, remote_error) = match remote {
            Some(Ok(vehicles)) if !vehicles.is_empty() => {
                self.metrics.record_remote_success();
                (ResultSource::Remote, vehicles, None)
            }
            Some(Ok(_)) => {
                info!(
                    "Remote search returned nothing for '{}', using local ranking",
                    request.query
                );
                self.metrics.record_remote_empty();
                (ResultSource::Fallback, self.rank_local(request, catalog), None)
            }
            Some(Err(e)) => {
                warn!("{}, using local ranking", e);
                self.metrics.record_remote_failure();
                (ResultSource::Fallback, self.rank_local(request, catalog), Some(e))
            }
            None => (ResultSource::Fallback, self.rank_local(request, catalog), None),
        };

        if source == ResultSource::Fallback {
            self.metrics.record_fallback();
        }

        // A fallback produced because the remote failed is not cached
        if let (Some(cache), Some(key), None) = (&self.cache, cache_key, &remote_error) {
            let ids = vehicles.iter().map(|v| v.id.clone()).collect();
            cache.set(key, ids).await;
        }

        finish(vehicles, source, remote_error, limit, start)
    }

    /// Call the remote service under the configured timeout
    async fn search_remote(
        &self,
        service: &dyn RelevanceService,
        query: &str,
        catalog: &Catalog,
    ) -> Result<Vec<Vehicle>, MatchError> {
        let name = service.name().to_string();
        debug!(
            "Querying relevance service {} with timeout {:?}",
            name, self.remote_timeout
        );

        match timeout(self.remote_timeout, service.search(query, catalog)).await {
            Ok(Ok(ids)) => {
                let vehicles = map_ids(&ids, catalog);
                if vehicles.len() < ids.len() {
                    debug!(
                        "Dropped {} unknown or duplicate ids from {}",
                        ids.len() - vehicles.len(),
                        name
                    );
                }
                Ok(vehicles)
            }
            Ok(Err(e)) => Err(MatchError::Remote {
                service: name,
                message: e.to_string(),
            }),
            Err(_) => Err(MatchError::Timeout { service: name }),
        }
    }

    fn rank_local(&self, request: &SearchRequest, catalog: &Catalog) -> Vec<Vehicle> {
        let ranking = ranking::rank_detailed(&request.query, catalog.vehicles());
        debug!(
            "Local ranking for '{}' returned {} vehicles via {:?}",
            request.query,
            ranking.len(),
            ranking.source
        );
        ranking.vehicles().into_iter().cloned().collect()
    }
}

/// Convert a timeout in seconds, rejecting NaN, negative, and out-of-range values
fn remote_timeout(seconds: f64) -> Duration {
    match Duration::try_from_secs_f64(seconds) {
        Ok(timeout) => timeout,
        Err(_) => {
            warn!(
                "Invalid remote timeout {}s, using {:?}",
                seconds, DEFAULT_REMOTE_TIMEOUT
            );
            DEFAULT_REMOTE_TIMEOUT
        }
    }
}

/// Map ordered ids onto catalog vehicles, dropping unknown and repeated ids
fn map_ids(ids: &[String], catalog: &Catalog) -> Vec<Vehicle> {
    let by_id: HashMap<&str, &Vehicle> = catalog
        .vehicles()
        .iter()
        .map(|v| (v.id.as_str(), v))
        .collect();
    let mut seen = HashSet::new();

    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| by_id.get(id.as_str()).map(|v| (*v).clone()))
        .collect()
}

fn finish(
    mut vehicles: Vec<Vehicle>,
    source: ResultSource,
    remote_error: Option<MatchError>,
    limit: Option<usize>,
    start: Instant,
) -> SearchOutcome {
    if let Some(limit) = limit {
        vehicles.truncate(limit);
    }
    SearchOutcome {
        vehicles,
        source,
        remote_error,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}
