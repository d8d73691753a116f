//! Board-game catalog gateway
//!
//! Caching, normalizing front for the BoardGameGeek XML API: free-text search
//! and item lookups, each answered from an in-process TTL cache when possible.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use catalog::CatalogService;
pub use config::Config;
pub use error::CatalogError;
