// cache.rs
use crate::sources::{Fetch, SourceError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CachedBody {
    fetched_at: Instant,
    body: String,
}

/// Raw source bodies keyed by URL, shared by every request of the process.
/// A stale or missing entry is simply a miss.
pub struct SourceCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedBody>>,
}

impl SourceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, url: &str) -> Option<String> {
        self.get_at(url, Instant::now())
    }

    pub fn put(&self, url: &str, body: String) {
        self.put_at(url, body, Instant::now());
    }

    pub fn get_at(&self, url: &str, now: Instant) -> Option<String> {
        if self.ttl.is_zero() {
            return None;
        }

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(url) {
            Some(entry) if now.saturating_duration_since(entry.fetched_at) < self.ttl => {
                Some(entry.body.clone())
            }
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    pub fn put_at(&self, url: &str, body: String, now: Instant) {
        if self.ttl.is_zero() {
            return;
        }

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            url.to_string(),
            CachedBody {
                fetched_at: now,
                body,
            },
        );
    }
}

/// Wraps a fetcher so repeated page loads within the TTL skip the network.
/// Failures pass straight through and are never cached.
pub struct CachedFetcher<F> {
    inner: F,
    cache: SourceCache,
}

impl<F: Fetch> CachedFetcher<F> {
    pub fn new(inner: F, ttl: Duration) -> Self {
        Self {
            inner,
            cache: SourceCache::new(ttl),
        }
    }
}

impl<F: Fetch> Fetch for CachedFetcher<F> {
    fn fetch(&self, url: &str) -> Result<String, SourceError> {
        if let Some(body) = self.cache.get(url) {
            log::debug!("Cache hit for {url}");
            return Ok(body);
        }

        let body = self.inner.fetch(url)?;
        self.cache.put(url, body.clone());
        Ok(body)
    }
}
