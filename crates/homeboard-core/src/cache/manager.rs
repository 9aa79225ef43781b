use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};

use super::store::{KeyValueStore, MemoryStore};

/// Consider an entry stale after 10 minutes unless the caller says otherwise.
/// Matches the refresh cadence of the remote feeds.
pub const DEFAULT_MAX_AGE: StdDuration = StdDuration::from_millis(600_000);

/// A stored value plus the instant it was written.
/// The timestamp is persisted as milliseconds since the epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub cached_at: DateTime<Utc>,
    pub data: T,
}

impl<T> CachedData<T> {
    pub fn new(data: T, cached_at: DateTime<Utc>) -> Self {
        Self { data, cached_at }
    }

    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.cached_at
    }

    /// Fresh while the age does not exceed `max_age`. Equality counts as fresh,
    /// and an entry from the future (clock skew) is fresh too.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, max_age: StdDuration) -> bool {
        let max_ms = i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX);
        self.age_at(now).num_milliseconds() <= max_ms
    }
}

/// Human-readable age for the status bar.
pub fn age_display(age: Duration) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        // Also covers clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        let remaining_mins = minutes % 60;
        if remaining_mins >= 30 {
            format!("{}h ago", hours + 1)
        } else {
            format!("{}h ago", hours)
        }
    } else {
        let days = minutes / 1440;
        let remaining_hours = (minutes % 1440) / 60;
        if remaining_hours >= 12 {
            format!("{}d ago", days + 1)
        } else {
            format!("{}d ago", days)
        }
    }
}

/// Read-through cache with lazy, read-triggered eviction.
///
/// Clones share the same store and clock. Writes are best effort: a failure
/// to serialize or store is logged and otherwise ignored, since caching must
/// never stand between a fetch and its render.
#[derive(Clone)]
pub struct ExpiringCache {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ExpiringCache {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Process-local cache on the wall clock.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        let entry = CachedData::new(value, self.clock.now());
        let contents = match serde_json::to_string(&entry) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &contents) {
            warn!(key = %key, error = %e, "Failed to write cache entry");
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_within(key, DEFAULT_MAX_AGE)
    }

    /// Return the value stored under `key` if it is no older than `max_age`.
    /// Stale and undecodable entries are removed and reported as absent.
    pub fn get_within<T: DeserializeOwned>(&self, key: &str, max_age: StdDuration) -> Option<T> {
        let entry: CachedData<T> = self.load(key)?;

        if entry.is_fresh_at(self.clock.now(), max_age) {
            Some(entry.data)
        } else {
            debug!(key = %key, "Cache entry expired, evicting");
            self.remove(key);
            None
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key = %key, error = %e, "Failed to remove cache entry");
        }
    }

    /// Age of the entry under `key`, without evicting it.
    pub fn age(&self, key: &str) -> Option<Duration> {
        let entry: CachedData<serde_json::Value> = self.load(key)?;
        Some(entry.age_at(self.clock.now()))
    }

    pub fn age_display(&self, key: &str) -> Option<String> {
        self.age(key).map(age_display)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let contents = match self.store.get(key) {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(e) => {
                debug!(key = %key, error = %e, "Failed to read cache entry");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(key = %key, error = %e, "Discarding malformed cache entry");
                self.remove(key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::FileStore;
    use crate::clock::ManualClock;
    use serde_json::json;

    fn setup() -> (ExpiringCache, Arc<ManualClock>, Arc<MemoryStore>) {
        let clock = Arc::new(ManualClock::at_epoch());
        let store = Arc::new(MemoryStore::new());
        let cache = ExpiringCache::new(store.clone(), clock.clone());
        (cache, clock, store)
    }

    #[test]
    fn test_put_then_get_returns_value() {
        let (cache, _, _) = setup();
        cache.put("weather", &json!({"temp": 20}));

        let value: Option<serde_json::Value> = cache.get_within("weather", StdDuration::ZERO);
        assert_eq!(value, Some(json!({"temp": 20})));
        assert_eq!(cache.get::<serde_json::Value>("weather"), Some(json!({"temp": 20})));
    }

    #[test]
    fn test_expiry_boundary() {
        let (cache, clock, _) = setup();
        cache.put("weather", &json!({"temp": 20}));

        clock.set(DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(599_999));
        assert_eq!(cache.get::<serde_json::Value>("weather"), Some(json!({"temp": 20})));

        clock.set(DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(600_000));
        assert_eq!(cache.get::<serde_json::Value>("weather"), Some(json!({"temp": 20})));

        clock.set(DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(600_001));
        assert_eq!(cache.get::<serde_json::Value>("weather"), None);
    }

    #[test]
    fn test_stale_read_evicts_entry() {
        let (cache, clock, store) = setup();
        cache.put("news", &vec!["a", "b"]);

        clock.advance_ms(1_001);
        assert_eq!(cache.get_within::<Vec<String>>("news", StdDuration::from_secs(1)), None);
        assert!(store.is_empty());

        // A wider window cannot resurrect it
        assert_eq!(cache.get_within::<Vec<String>>("news", StdDuration::from_secs(3600)), None);
    }

    #[test]
    fn test_keys_are_isolated() {
        let (cache, _, _) = setup();
        cache.put("a", &1);

        assert_eq!(cache.get::<i32>("b"), None);
        cache.put("b", &2);
        assert_eq!(cache.get::<i32>("a"), Some(1));
        assert_eq!(cache.get::<i32>("b"), Some(2));
    }

    #[test]
    fn test_keys_are_isolated_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::new(dir.path().to_path_buf()).unwrap());
        let cache = ExpiringCache::new(store, Arc::new(ManualClock::at_epoch()));

        cache.put("a.b", &1);
        assert_eq!(cache.get::<i32>("a_b"), None);
        assert_eq!(cache.get::<i32>("a/b"), None);
        assert_eq!(cache.get::<i32>("a.b"), Some(1));
    }

    #[test]
    fn test_put_overwrites_and_refreshes_timestamp() {
        let (cache, clock, _) = setup();
        cache.put("currency", &100.0_f64);

        clock.advance_ms(500_000);
        cache.put("currency", &110.0_f64);

        clock.advance_ms(500_000);
        assert_eq!(cache.get::<f64>("currency"), Some(110.0));
    }

    #[test]
    fn test_malformed_entry_is_absent_and_removed() {
        let (cache, _, store) = setup();
        store.set("weather", "not json at all").unwrap();

        assert_eq!(cache.get::<serde_json::Value>("weather"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_absent() {
        let (cache, _, _) = setup();
        cache.put("currency", &"a string");
        assert_eq!(cache.get::<f64>("currency"), None);
    }

    #[test]
    fn test_serialized_format_uses_millisecond_timestamp() {
        let (cache, clock, store) = setup();
        clock.advance_ms(1_234);
        cache.put("currency", &109.5_f64);

        let raw = store.get("currency").unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, json!({"timestamp": 1234, "data": 109.5}));
    }

    #[test]
    fn test_future_entry_is_fresh() {
        let (cache, clock, _) = setup();
        clock.advance_ms(10_000);
        cache.put("weather", &1);
        clock.set(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(cache.get_within::<i32>("weather", StdDuration::ZERO), Some(1));
    }

    #[test]
    fn test_age_does_not_evict() {
        let (cache, clock, _) = setup();
        cache.put("news", &0);
        clock.advance(Duration::hours(2));

        assert_eq!(cache.age("news"), Some(Duration::hours(2)));
        assert_eq!(cache.age_display("news").as_deref(), Some("2h ago"));
        assert_eq!(cache.age("news"), Some(Duration::hours(2)));
        assert_eq!(cache.age("missing"), None);
    }

    #[test]
    fn test_remove() {
        let (cache, _, _) = setup();
        cache.put("weather", &1);
        cache.remove("weather");
        assert_eq!(cache.get::<i32>("weather"), None);
    }

    #[test]
    fn test_age_display() {
        assert_eq!(age_display(Duration::seconds(10)), "just now");
        assert_eq!(age_display(Duration::minutes(-5)), "just now");
        assert_eq!(age_display(Duration::minutes(5)), "5m ago");
        assert_eq!(age_display(Duration::minutes(89)), "1h ago");
        assert_eq!(age_display(Duration::minutes(90)), "2h ago");
        assert_eq!(age_display(Duration::hours(36)), "2d ago");
        assert_eq!(age_display(Duration::hours(30)), "1d ago");
    }
}
