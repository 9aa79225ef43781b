//! Core library for homeboard, a personal dashboard.
//!
//! The remote widgets (weather, news headlines, currency rate) are driven by
//! a refresh scheduler that reads through an expiring cache before touching
//! the network:
//!
//! - `cache`: `ExpiringCache` with lazy eviction over a pluggable store
//! - `scheduler`: `FeedDescriptor`, the read-through cycle and `Scheduler`
//! - `api`: HTTP client for the three providers
//! - `board`: render targets the widgets write into
//! - `widgets`: feed renderers plus calendar, clock face and backdrop
//! - `dashboard`: the context object wiring it all together

pub mod api;
pub mod board;
pub mod cache;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod scheduler;
pub mod utils;
pub mod widgets;

pub use board::{Board, Content};
pub use cache::{ExpiringCache, FileStore, KeyValueStore, MemoryStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use dashboard::{Dashboard, FeedSummary};
pub use scheduler::{FeedDescriptor, Scheduler};
