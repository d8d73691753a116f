//! API Handlers
//!
//! HTTP request handlers for each catalog gateway endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::catalog::{CatalogItemDetail, CatalogService, CatalogUpstream, HttpUpstream};
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, SearchParams, SearchResultResponse, StatsResponse, ThingParams};

/// Application state shared across all handlers.
///
/// The catalog service owns its caches behind `Arc`, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP upstream client and a service whose caches use `cache_ttl`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let upstream: Arc<dyn CatalogUpstream> = Arc::new(HttpUpstream::from_config(config)?);
        let catalog = CatalogService::with_ttl(upstream, Duration::from_secs(config.cache_ttl));
        Ok(Self::new(catalog))
    }
}

/// Handler for GET /api/bgg/search?q=
///
/// Returns display-ready search results.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResultResponse>>> {
    let results = state.catalog.search(&params.q).await?;
    Ok(Json(results.into_iter().map(SearchResultResponse::from).collect()))
}

/// Handler for GET /api/bgg/thing?id=
pub async fn thing_handler(
    State(state): State<AppState>,
    Query(params): Query<ThingParams>,
) -> Result<Json<CatalogItemDetail>> {
    let detail = state.catalog.fetch_detail(&params.id).await?;
    Ok(Json(detail))
}

/// Handler for GET /stats
///
/// Returns statistics for the search and detail caches.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let (search, detail) = state.catalog.cache_stats().await;
    Json(StatsResponse::new(&search, &detail))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
