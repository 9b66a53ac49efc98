//! Remote relevance service seam

use crate::catalog::Catalog;
use async_trait::async_trait;

/// An external "intelligent search" backend.
///
/// Implementations return catalog vehicle ids, best first. Ids that are not
/// in the catalog are ignored by the controller.
#[async_trait]
pub trait RelevanceService: Send + Sync {
    /// Service name, used in logs and errors
    fn name(&self) -> &str;

    /// Rank the catalog for a query
    async fn search(&self, query: &str, catalog: &Catalog) -> anyhow::Result<Vec<String>>;
}
