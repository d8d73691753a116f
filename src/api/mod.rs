//! API Module
//!
//! HTTP handlers and routing for the catalog gateway.
//!
//! # Endpoints
//! - `GET /api/bgg/search?q=` - Search the catalog for board games
//! - `GET /api/bgg/thing?id=` - Fetch one catalog item
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
