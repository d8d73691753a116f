//! Error types for the catalog gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::catalog::XmlError;

// == Catalog Error Enum ==
/// Unified error type for catalog lookups.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Caller supplied an empty or malformed query/identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream answered but has no such item
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure, non-success status, or unparseable upstream response
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Upstream(format!("request timed out: {}", err))
        } else {
            CatalogError::Upstream(err.to_string())
        }
    }
}

impl From<XmlError> for CatalogError {
    fn from(err: XmlError) -> Self {
        CatalogError::Upstream(format!("unparseable response: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CatalogError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CatalogError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CatalogError::Upstream(msg) => {
                // Details stay in the log; callers get a generic message
                error!("Catalog upstream failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch from catalog".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
