//! Catalog Module
//!
//! Integration layer for the external board-game catalog: upstream client,
//! XML tree reader, normalization into typed records, and the cached lookup
//! service built on top of them.

pub mod normalize;
pub mod records;
pub mod service;
pub mod upstream;
pub mod xml;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub use records::{CatalogItemDetail, CatalogSearchResult, UNRANKED_SENTINEL};
pub use service::CatalogService;
pub use upstream::{CatalogUpstream, HttpUpstream};
pub use xml::XmlError;
