use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Tuning knobs for [`TextCache`].
#[derive(Debug, Clone)]
pub struct TextCacheConfig {
    /// TTL applied when `add` is called without an explicit one.
    pub default_ttl: Duration,
    /// Upper bound on stored entries. Zero disables storage entirely.
    pub max_entries: usize,
}

impl Default for TextCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(600),
            max_entries: 256,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.inserted_at) >= self.ttl
    }
}

/// Counters exposed for logging and the stats endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe text cache keyed by request cache keys.
///
/// Lookups never hand out expired values: an expired entry is dropped on
/// access and counted as a miss, so callers only ever see live text.
pub struct TextCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    config: TextCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TextCache {
    pub fn new() -> Self {
        Self::with_config(TextCacheConfig::default())
    }

    pub fn with_config(config: TextCacheConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Fetch a live entry, or `None` on a miss or an expired one.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        let now = Instant::now();

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store `value` under `key`, with `ttl` overriding the configured default.
    ///
    /// Re-adding an existing key replaces its value and restarts its clock.
    /// At capacity, the oldest entry is evicted to make room.
    pub fn add(&self, key: &str, value: &str, ttl: Option<Duration>) {
        if self.config.max_entries == 0 {
            return;
        }

        let mut entries = self.entries.lock().unwrap();

        if !entries.contains_key(key) && entries.len() >= self.config.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                inserted_at: Instant::now(),
                ttl: ttl.unwrap_or(self.config.default_ttl),
            },
        );
    }

    /// Whether a live entry exists for `key`. Does not touch the counters.
    pub fn has(&self, key: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        let now = Instant::now();
        entries.get(key).map_or(false, |entry| !entry.is_expired(now))
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Drop expired entries eagerly, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for TextCache {
    fn default() -> Self {
        Self::new()
    }
}
