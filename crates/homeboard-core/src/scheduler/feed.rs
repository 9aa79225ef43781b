use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::future::{BoxFuture, FutureExt};
use tracing::warn;

use crate::cache::DEFAULT_MAX_AGE;

/// Default period between refresh cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(600);

/// Shortest period a feed may tick at; a zero period would panic the timer.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

type FetchFn<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;
type RenderFn<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorFn = Arc<dyn Fn(&str) + Send + Sync>;

/// One independently scheduled data source and the widget it drives.
///
/// A feed is pure configuration: where its value lives in the cache, how to
/// fetch a fresh one, how to render it and how often to try.
pub struct FeedDescriptor<T> {
    key: String,
    fetch: FetchFn<T>,
    render: RenderFn<T>,
    render_error: ErrorFn,
    interval: Duration,
    max_age: Duration,
}

impl<T> Clone for FeedDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            fetch: Arc::clone(&self.fetch),
            render: Arc::clone(&self.render),
            render_error: Arc::clone(&self.render_error),
            interval: self.interval,
            max_age: self.max_age,
        }
    }
}

impl<T> fmt::Debug for FeedDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedDescriptor")
            .field("key", &self.key)
            .field("interval", &self.interval)
            .field("max_age", &self.max_age)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> FeedDescriptor<T> {
    pub fn new<F, Fut, R>(key: impl Into<String>, fetch: F, render: R) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        R: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            fetch: Arc::new(move || fetch().boxed()),
            render: Arc::new(render),
            render_error: Arc::new(|_| {}),
            interval: DEFAULT_INTERVAL,
            max_age: DEFAULT_MAX_AGE,
        }
    }

    /// Period between cycles after the immediate first one.
    pub fn every(mut self, interval: Duration) -> Self {
        if interval < MIN_INTERVAL {
            warn!(key = %self.key, ?interval, "Feed interval too short, clamping");
        }
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    /// Freshness window for cache reads.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Called with the failure message when a cycle's fetch fails.
    pub fn on_error<E>(mut self, render_error: E) -> Self
    where
        E: Fn(&str) + Send + Sync + 'static,
    {
        self.render_error = Arc::new(render_error);
        self
    }
}

impl<T> FeedDescriptor<T> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn freshness(&self) -> Duration {
        self.max_age
    }

    pub(crate) fn fetch(&self) -> BoxFuture<'static, Result<T>> {
        (self.fetch)()
    }

    pub(crate) fn render(&self, value: &T) {
        (self.render)(value)
    }

    pub(crate) fn render_error(&self, message: &str) {
        (self.render_error)(message)
    }
}
