//! LRU cache for computed embeddings.
//!
//! A request embeds the whole review plus every candidate word; repeated
//! vocabulary across requests makes word embeddings highly re-usable.
//! Default: 2048 entries, 1-hour TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ndarray::Array1;
use parking_lot::Mutex;

struct Entry {
    embedding: Array1<f32>,
    inserted_at: Instant,
}

/// Thread-safe LRU + TTL cache keyed by the embedded text.
pub struct EmbeddingCache {
    inner: Mutex<Inner>,
}

struct Inner {
    entries: HashMap<String, Entry>,
    order: Vec<String>,
    capacity: usize,
    ttl: Duration,
}

impl EmbeddingCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                order: Vec::with_capacity(capacity),
                capacity,
                ttl,
            }),
        }
    }

    /// Cache with default settings (2048 entries, 1hr TTL).
    pub fn default_cache() -> Self {
        Self::new(2048, Duration::from_secs(3600))
    }

    /// Get a cached embedding. Returns None on miss or expired entry.
    pub fn get(&self, text: &str) -> Option<Array1<f32>> {
        let mut inner = self.inner.lock();

        let expired = inner
            .entries
            .get(text)
            .map(|e| e.inserted_at.elapsed() >= inner.ttl)?;

        if expired {
            let key = text.to_string();
            inner.entries.remove(&key);
            inner.order.retain(|k| k != &key);
            return None;
        }

        // Refresh recency.
        if let Some(pos) = inner.order.iter().position(|k| k == text) {
            let key = inner.order.remove(pos);
            inner.order.push(key);
        }
        inner.entries.get(text).map(|e| e.embedding.clone())
    }

    /// Insert an embedding, evicting the least recently used entry at
    /// capacity.
    pub fn put(&self, text: String, embedding: Array1<f32>) {
        let mut inner = self.inner.lock();

        if inner.entries.contains_key(&text) {
            inner.order.retain(|k| k != &text);
        } else {
            while inner.entries.len() >= inner.capacity && !inner.order.is_empty() {
                let oldest = inner.order.remove(0);
                inner.entries.remove(&oldest);
            }
        }

        inner.order.push(text.clone());
        inner.entries.insert(
            text,
            Entry {
                embedding,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
