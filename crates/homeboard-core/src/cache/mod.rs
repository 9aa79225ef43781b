//! Local response cache with time-based expiry.
//!
//! `ExpiringCache` stores feed payloads keyed by feed name together with the
//! instant they were written. A read returns the payload only while it is
//! within the caller's freshness window (10 minutes by default); a stale read
//! evicts the entry. There is no background sweep.
//!
//! Storage is pluggable through `KeyValueStore`:
//! - `FileStore`: one JSON file per key, survives restarts
//! - `MemoryStore`: process-local map

pub mod manager;
pub mod store;

pub use manager::{age_display, CachedData, ExpiringCache, DEFAULT_MAX_AGE};
pub use store::{FileStore, KeyValueStore, MemoryStore};
