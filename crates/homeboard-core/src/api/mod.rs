//! HTTP client module for the dashboard's remote providers.
//!
//! This module provides the `ApiClient` for fetching current weather,
//! news headlines and exchange rates, and `ApiError` for the failures
//! those requests can produce.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
