use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct CachedResponse {
    body: Value,
    // `None` when the TTL is too large to represent
    expires_at: Option<Instant>,
}

impl CachedResponse {
    fn is_fresh(&self) -> bool {
        self.expires_at.map_or(true, |at| Instant::now() < at)
    }
}

/// In-memory response cache keyed by request URL.
///
/// Entries expire `ttl` after they were stored; expired entries are never returned
/// and are dropped on the next lookup. Concurrent writers for the same URL are
/// resolved last-writer-wins.
#[derive(Default)]
pub(crate) struct ResponseCache {
    entries: Mutex<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn get(&self, url: &str) -> Option<Value> {
        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.get(url) {
            if entry.is_fresh() {
                return Some(entry.body.clone());
            }
            entries.remove(url);
        }
        None
    }

    pub(crate) async fn put(&self, url: &str, body: Value, ttl: Duration) {
        let expires_at = Instant::now().checked_add(ttl);
        self.entries
            .lock()
            .await
            .insert(url.to_string(), CachedResponse { body, expires_at });
    }

    pub(crate) async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub(crate) async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
