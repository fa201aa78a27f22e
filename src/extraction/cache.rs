//! Time-boxed, size-bounded cache of extracted keyword sets, keyed by job
//! posting. Eviction is strict insertion order (FIFO, not LRU): when the
//! table is full the oldest-inserted entry goes, even if it is the one being
//! re-read constantly.

use crate::extraction::extractor::KeywordSet;
use log::debug;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default entry lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Default entry cap.
pub const DEFAULT_CAPACITY: usize = 100;

/// Length of the text prefix used for fallback key derivation.
const FINGERPRINT_PREFIX_LEN: usize = 200;

struct CacheEntry {
    keywords: KeywordSet,
    created_at: Instant,
}

struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    insertion_order: VecDeque<String>,
}

pub struct KeywordCache {
    inner: Mutex<CacheInner>,
    ttl: Duration,
    capacity: usize,
}

impl Default for KeywordCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl KeywordCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                insertion_order: VecDeque::new(),
            }),
            ttl,
            capacity,
        }
    }

    /// Derive the cache key for a posting: the URL verbatim when present,
    /// otherwise a cheap fingerprint of the text (200-char prefix + length).
    /// Two distinct texts sharing that prefix and length collide; this is a
    /// known limitation of the fingerprint, not a hash.
    pub fn key(url: Option<&str>, text: &str) -> String {
        match url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                let prefix: String = text.chars().take(FINGERPRINT_PREFIX_LEN).collect();
                format!("{}:{}", prefix, text.len())
            }
        }
    }

    /// Return the cached keyword set if present and younger than the TTL.
    /// Expired entries read as absent; they are not purged here.
    pub fn get(&self, key: &str) -> Option<KeywordSet> {
        let inner = self.inner.lock().expect("keyword cache poisoned");
        inner.entries.get(key).and_then(|entry| {
            if entry.created_at.elapsed() < self.ttl {
                debug!("keyword cache hit for key ({} chars)", key.len());
                Some(entry.keywords.clone())
            } else {
                debug!("keyword cache entry expired for key ({} chars)", key.len());
                None
            }
        })
    }

    /// Insert a keyword set, evicting the single oldest-inserted entry first
    /// when at capacity.
    pub fn put(&self, key: &str, keywords: KeywordSet) {
        let mut inner = self.inner.lock().expect("keyword cache poisoned");
        if !inner.entries.contains_key(key) && inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.insertion_order.pop_front() {
                debug!("keyword cache full, evicting oldest entry");
                inner.entries.remove(&oldest);
            }
        }
        if !inner.entries.contains_key(key) {
            inner.insertion_order.push_back(key.to_string());
        }
        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                keywords,
                created_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("keyword cache poisoned");
        inner.entries.clear();
        inner.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("keyword cache poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
