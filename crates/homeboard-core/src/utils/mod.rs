//! Utility functions for string formatting.

pub mod format;

pub use format::{clean_headline, format_clock_time};
