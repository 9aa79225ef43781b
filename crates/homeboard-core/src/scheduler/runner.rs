use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cache::ExpiringCache;

use super::feed::FeedDescriptor;
use super::status::{CycleOutcome, FeedState, FeedStatus};

/// Run one read-through cycle for `feed`.
///
/// A fresh cache entry is rendered without touching the network. On a miss
/// the feed is fetched; a successful value is cached and then rendered, a
/// failure is rendered as an inline error and nothing is cached.
pub async fn run_cycle<T>(
    cache: &ExpiringCache,
    status: &FeedStatus,
    feed: &FeedDescriptor<T>,
) -> CycleOutcome
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    let key = feed.key();
    status.transition(key, FeedState::Triggered);

    if let Some(value) = cache.get_within::<T>(key, feed.freshness()) {
        status.transition(key, FeedState::CacheHit);
        feed.render(&value);
        status.transition(key, FeedState::Rendered);
        debug!(key = %key, "Rendered from cache");
        status.finish(key, CycleOutcome::CacheHit);
        return CycleOutcome::CacheHit;
    }

    status.transition(key, FeedState::CacheMiss);
    status.transition(key, FeedState::Fetching);

    match feed.fetch().await {
        Ok(value) => {
            cache.put(key, &value);
            status.transition(key, FeedState::Cached);
            feed.render(&value);
            status.transition(key, FeedState::Rendered);
            debug!(key = %key, "Fetched and rendered");
            status.finish(key, CycleOutcome::Fetched);
            CycleOutcome::Fetched
        }
        Err(e) => {
            let message = format!("{:#}", e);
            warn!(key = %key, error = %message, "Feed fetch failed, will retry on next tick");
            feed.render_error(&message);
            status.transition(key, FeedState::ErrorReported);
            status.finish(key, CycleOutcome::Failed(message.clone()));
            CycleOutcome::Failed(message)
        }
    }
}

/// Owns one recurring task per feed.
///
/// Each feed runs on its own task with its own timer, so a slow or failing
/// feed never holds up another. Dropping the scheduler stops every feed.
pub struct Scheduler {
    cache: ExpiringCache,
    status: FeedStatus,
    tasks: HashMap<String, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(cache: ExpiringCache) -> Self {
        Self {
            cache,
            status: FeedStatus::new(),
            tasks: HashMap::new(),
        }
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Run `feed` once now and then every `feed.interval()` until stopped.
    /// Starting a key that is already running replaces the old task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<T>(&mut self, feed: FeedDescriptor<T>)
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        let key = feed.key().to_string();
        let cache = self.cache.clone();
        let status = self.status.clone();

        info!(
            key = %key,
            interval_secs = feed.interval().as_secs(),
            "Starting feed"
        );

        let handle = tokio::spawn(async move {
            // The first tick completes immediately
            let mut ticker = tokio::time::interval(feed.interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                run_cycle(&cache, &status, &feed).await;
            }
        });

        if let Some(previous) = self.tasks.insert(key, handle) {
            previous.abort();
        }
    }

    /// Stop a feed. Returns false if it was not running.
    pub fn stop(&mut self, key: &str) -> bool {
        match self.tasks.remove(key) {
            Some(handle) => {
                handle.abort();
                self.status.transition(key, FeedState::Idle);
                info!(key = %key, "Stopped feed");
                true
            }
            None => false,
        }
    }

    pub fn stop_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            handle.abort();
            debug!(key = %key, "Stopped feed");
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .get(key)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn running_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.tasks.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop_all();
    }
}
