//! Cache Module
//!
//! Single-entry, time-based cache for the remote mapping table. A refresh
//! replaces the table wholesale; a failed refresh falls back to the stale
//! table when one exists.

mod entry;
mod stats;
mod store;
mod table;


// Re-export public types
pub use entry::CachedMapping;
pub use stats::RelayStats;
pub use store::MappingCache;
pub use table::MappingTable;
