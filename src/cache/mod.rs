use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

/// Sentinel for a filter the caller did not provide.
pub const ANY: &str = "any";

/// Composite cache key over the random-user filters. Absent and empty fields
/// normalize to [`ANY`], so equivalent filter tuples map to one key no matter
/// how the caller spelled them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    gender: String,
    name: String,
    occupation: String,
}

impl CacheKey {
    pub fn new(gender: Option<&str>, name: Option<&str>, occupation: Option<&str>) -> Self {
        Self {
            gender: normalize(gender),
            name: normalize(name),
            occupation: normalize(occupation),
        }
    }
}

fn normalize(filter: Option<&str>) -> String {
    match filter {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => ANY.to_string(),
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// TTL cache for upstream random-user records. Expiry is checked lazily on
/// read; the periodic sweep reclaims memory for entries nobody asks for again.
#[derive(Clone)]
pub struct RandomUserCache {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
    ttl: Duration,
}

impl RandomUserCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the live entry for `key`, or `None` when there is no entry or
    /// it has expired. An expired entry is never served.
    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            _ => None,
        }
    }

    pub async fn insert(&self, key: CacheKey, value: Value) {
        let mut entries = self.entries.write().await;
        entries.insert(key, CacheEntry::new(value, self.ttl));
    }

    /// Removes every expired entry, returning how many were dropped.
    pub async fn sweep(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Spawns the background sweep. The handle can be aborted on shutdown.
pub fn spawn_sweep_task(cache: RandomUserCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await; // first tick fires immediately
        loop {
            ticker.tick().await;
            let removed = cache.sweep().await;
            if removed > 0 {
                debug!("cache sweep removed {} expired entries", removed);
            }
        }
    })
}
