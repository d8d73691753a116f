//! Request DTOs for the catalog gateway API
//!
//! Defines the query strings accepted by the lookup endpoints.

use serde::Deserialize;

/// Query string for GET /api/bgg/search
///
/// A missing `q` deserializes to an empty string so the service reports it as
/// invalid input rather than the extractor rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text search query
    #[serde(default)]
    pub q: String,
}

/// Query string for GET /api/bgg/thing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThingParams {
    /// Catalog item identifier
    #[serde(default)]
    pub id: String,
}
