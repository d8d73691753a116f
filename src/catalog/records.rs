//! Catalog records
//!
//! Stable, typed shapes produced by normalization. Both are immutable values
//! once built.

use serde::{Deserialize, Serialize};

/// Rank value the catalog uses for items that have no rank.
pub const UNRANKED_SENTINEL: u32 = 999_999;

/// One candidate returned by a free-text search, in upstream relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSearchResult {
    pub id: u64,
    pub name: String,
    pub year: Option<i32>,
    /// Raw rank as reported upstream; may be [`UNRANKED_SENTINEL`]
    pub rank: Option<u32>,
    pub image_url: Option<String>,
}

impl CatalogSearchResult {
    /// Rank suitable for display, with the unranked sentinel suppressed.
    pub fn display_rank(&self) -> Option<u32> {
        self.rank.filter(|rank| *rank != UNRANKED_SENTINEL)
    }
}

/// Full record for a single catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDetail {
    pub id: u64,
    pub name: String,
    /// Edition and printing names other than the canonical title, in upstream order
    pub alternate_names: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub min_players: u32,
    pub max_players: u32,
    pub playing_time_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub complexity_weight: f64,
}
