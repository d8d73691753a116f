//! Cache Module
//!
//! Provides a generic in-memory cache with per-entry TTL and lazy expiry.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default lifetime of a cached catalog response in seconds (one hour)
pub const DEFAULT_TTL_SECS: u64 = 60 * 60;
