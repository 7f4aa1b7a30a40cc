use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::{DisplayRecord, PlayerKey};

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub record: Arc<DisplayRecord>,
    pub created_at: Instant,
}

impl CacheEntry {
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

/// In-memory store of display records with a fixed freshness window.
///
/// Entries are overwritten on refresh and never evicted.
pub struct PlayerCache {
    entries: RwLock<HashMap<PlayerKey, CacheEntry>>,
    ttl: Duration,
}

impl PlayerCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Entry for the key regardless of age
    pub fn get(&self, key: &PlayerKey) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    /// Record for the key only while younger than the TTL
    pub fn get_fresh(&self, key: &PlayerKey) -> Option<Arc<DisplayRecord>> {
        match self.get(key) {
            Some(entry) if self.is_fresh(&entry) => {
                debug!("Cache hit for {} (age {:?})", key, entry.age());
                Some(entry.record)
            }
            Some(_) => {
                debug!("Cache entry for {} is stale", key);
                None
            }
            None => {
                debug!("Cache miss for {}", key);
                None
            }
        }
    }

    pub fn put(&self, key: PlayerKey, record: Arc<DisplayRecord>) {
        let entry = CacheEntry {
            record,
            created_at: Instant::now(),
        };
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, entry);
    }

    pub fn is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.age() < self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
