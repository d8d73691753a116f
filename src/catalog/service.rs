//! Catalog Lookup Service
//!
//! Search and detail lookups, each fronted by its own TTL cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::normalize::{item_detail, search_results};
use super::records::{CatalogItemDetail, CatalogSearchResult};
use super::upstream::CatalogUpstream;
use super::xml::parse_document;
use crate::cache::{CacheStats, Clock, SystemClock, TtlCache};
use crate::error::{CatalogError, Result};

type SearchCache = TtlCache<Vec<CatalogSearchResult>>;
type DetailCache = TtlCache<CatalogItemDetail>;

/// Cached front for the upstream catalog.
///
/// Cloning is cheap; clones share the same caches and upstream. Cache locks
/// are only held for in-memory reads and writes, never across an upstream
/// call, so two concurrent misses for one key may both go upstream.
#[derive(Clone)]
pub struct CatalogService {
    upstream: Arc<dyn CatalogUpstream>,
    search_cache: Arc<RwLock<SearchCache>>,
    detail_cache: Arc<RwLock<DetailCache>>,
}

impl CatalogService {
    // == Constructors ==
    /// Creates a service from explicit caches.
    pub fn new(
        upstream: Arc<dyn CatalogUpstream>,
        search_cache: SearchCache,
        detail_cache: DetailCache,
    ) -> Self {
        Self {
            upstream,
            search_cache: Arc::new(RwLock::new(search_cache)),
            detail_cache: Arc::new(RwLock::new(detail_cache)),
        }
    }

    /// Creates a service whose caches share one TTL and the system clock.
    pub fn with_ttl(upstream: Arc<dyn CatalogUpstream>, ttl: Duration) -> Self {
        Self::with_clock(upstream, ttl, Arc::new(SystemClock))
    }

    /// Creates a service whose caches share one TTL and the given clock.
    pub fn with_clock(upstream: Arc<dyn CatalogUpstream>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            upstream,
            TtlCache::with_clock(ttl, clock.clone()),
            TtlCache::with_clock(ttl, clock),
        )
    }

    // == Search ==
    /// Free-text search for board games.
    ///
    /// The cache key is the trimmed query, compared case-sensitively. Empty
    /// result lists are cached like any other.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::InvalidInput("Missing q parameter".to_string()));
        }

        if let Some(cached) = self.search_cache.write().await.get(query) {
            debug!("Search cache hit for '{}'", query);
            return Ok(cached);
        }
        info!("Search cache miss for '{}'", query);

        let xml = self.upstream.search(query).await?;
        let document = parse_document(&xml)?;
        let results = search_results(&document)?;

        self.search_cache
            .write()
            .await
            .set(query, results.clone());
        info!("Cached {} search results for '{}'", results.len(), query);

        Ok(results)
    }

    // == Fetch Detail ==
    /// Full record for one catalog item.
    ///
    /// `id` must be a non-empty string of ASCII digits; it is used verbatim as
    /// the cache key.
    pub async fn fetch_detail(&self, id: &str) -> Result<CatalogItemDetail> {
        validate_id(id)?;

        if let Some(cached) = self.detail_cache.write().await.get(id) {
            debug!("Detail cache hit for id {}", id);
            return Ok(cached);
        }
        info!("Detail cache miss for id {}", id);

        let xml = self.upstream.thing(id).await?;
        let document = parse_document(&xml)?;
        let detail = match item_detail(&document, id) {
            Ok(detail) => detail,
            Err(CatalogError::NotFound(msg)) => {
                warn!("Catalog has no item with id {}", id);
                return Err(CatalogError::NotFound(msg));
            }
            Err(e) => return Err(e),
        };

        self.detail_cache.write().await.set(id, detail.clone());
        Ok(detail)
    }

    // == Stats ==
    /// Statistics for the search and detail caches, in that order.
    pub async fn cache_stats(&self) -> (CacheStats, CacheStats) {
        let search = self.search_cache.read().await.stats();
        let detail = self.detail_cache.read().await.stats();
        (search, detail)
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CatalogError::InvalidInput("Missing id".to_string()));
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidInput(format!(
            "Catalog id must be numeric, got '{}'",
            id
        )));
    }
    Ok(())
}
