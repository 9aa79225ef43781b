use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Where a feed is in its read-through cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Idle,
    Triggered,
    CacheHit,
    CacheMiss,
    Fetching,
    Cached,
    Rendered,
    ErrorReported,
}

/// How a single cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    CacheHit,
    Fetched,
    Failed(String),
}

impl CycleOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            CycleOutcome::CacheHit => "cached",
            CycleOutcome::Fetched => "fetched",
            CycleOutcome::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedStats {
    pub state: FeedState,
    pub cycles: u64,
    pub hits: u64,
    pub fetches: u64,
    pub failures: u64,
    pub last_outcome: Option<CycleOutcome>,
}

/// Per-feed counters shared between the feed tasks and whoever displays them.
#[derive(Clone, Default)]
pub struct FeedStatus {
    feeds: Arc<RwLock<HashMap<String, FeedStats>>>,
}

impl FeedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn transition(&self, key: &str, state: FeedState) {
        let mut feeds = self.feeds.write().unwrap_or_else(|e| e.into_inner());
        let stats = feeds.entry(key.to_string()).or_default();
        if state == FeedState::Triggered {
            stats.cycles += 1;
        }
        stats.state = state;
    }

    /// Record the end of a cycle; the feed goes back to idle until the next tick.
    pub(crate) fn finish(&self, key: &str, outcome: CycleOutcome) {
        let mut feeds = self.feeds.write().unwrap_or_else(|e| e.into_inner());
        let stats = feeds.entry(key.to_string()).or_default();
        match outcome {
            CycleOutcome::CacheHit => stats.hits += 1,
            CycleOutcome::Fetched => stats.fetches += 1,
            CycleOutcome::Failed(_) => stats.failures += 1,
        }
        stats.last_outcome = Some(outcome);
        stats.state = FeedState::Idle;
    }

    pub fn get(&self, key: &str) -> Option<FeedStats> {
        let feeds = self.feeds.read().unwrap_or_else(|e| e.into_inner());
        feeds.get(key).cloned()
    }

    pub fn snapshot(&self) -> Vec<(String, FeedStats)> {
        let feeds = self.feeds.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<_> = feeds.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }
}
