//! Data models for the remote feeds and local widgets.
//!
//! - `Weather`: current conditions from the weather provider
//! - `Post`: a news headline from the WordPress posts endpoint
//! - `ExchangeRates`: the currency provider's rate table
//! - `Task`: an entry of the local checklist
//!
//! A payload that decodes but lacks what its widget needs is rejected before
//! it is rendered or cached: `Weather::validate` requires a condition, and
//! `ExchangeRates::rate_for` requires the configured code. News posts are
//! checked by decoding alone.

pub mod currency;
pub mod news;
pub mod task;
pub mod weather;

pub use currency::ExchangeRates;
pub use news::{Post, RenderedText};
pub use task::{Task, TaskList};
pub use weather::{Condition, MainReadings, Weather};
