use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use keyhole_core::error::Result;
use keyhole_core::{LinkRecord, LinkStore, ReadLinkStore, ShortId};

/// In-memory implementation of the link store, backed by a `DashMap`.
///
/// Stands in for the real key-value backend in tests and single-process
/// deployments. Expiry behaves the way a TTL-sweeping backend looks from
/// the outside: expired entries are invisible to readers, and are evicted
/// lazily on access.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: DashMap<String, LinkRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of live plus not-yet-evicted entries, for tests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ReadLinkStore for MemoryStore {
    async fn get(&self, id: &ShortId) -> Result<Option<LinkRecord>> {
        let Some(entry) = self.entries.get(id.as_str()) else {
            return Ok(None);
        };

        if entry.is_expired_at(Timestamp::now()) {
            // Drop the read guard before removing, or the map deadlocks.
            drop(entry);
            self.entries.remove(id.as_str());
            return Ok(None);
        }

        Ok(Some(entry.clone()))
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn put(&self, id: &ShortId, record: LinkRecord) -> Result<()> {
        // Plain upsert: a colliding key is replaced, matching the
        // backend's last-writer-wins contract.
        self.entries.insert(id.as_str().to_owned(), record);
        Ok(())
    }

    async fn exists(&self, id: &ShortId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }
}
