//! Periodic refresh of the remote feeds.
//!
//! Each feed is described by a `FeedDescriptor`: a cache key, a fetch
//! operation, a render callback and a period. The `Scheduler` runs one
//! read-through cycle per feed immediately and then on every tick of the
//! feed's own timer:
//!
//! 1. fresh value in the cache → render it, no network
//! 2. otherwise fetch → cache and render, or render an inline error
//!
//! Failures never leave the feed's own task and never stop its timer.

pub mod feed;
pub mod runner;
pub mod status;

pub use feed::{FeedDescriptor, DEFAULT_INTERVAL, MIN_INTERVAL};
pub use runner::{run_cycle, Scheduler};
pub use status::{CycleOutcome, FeedState, FeedStats, FeedStatus};
