use crate::error::Result;
use crate::short_id::ShortId;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A stored link record, the value half of the identifier-to-URL mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The original URL that was shortened.
    pub long_url: String,
    /// The public short URL, always `domain_url + short_id`.
    pub short_url: String,
    /// Wall-clock creation time, formatted `YYYY-MM-DDTHH:MM:SS`.
    pub created_at: String,
    /// When the backend may expire the record.
    ///
    /// Persisted as the `ttl` attribute, an integer count of epoch
    /// seconds, and always strictly greater than the creation time.
    #[serde(
        rename = "ttl",
        with = "jiff::fmt::serde::timestamp::second::required"
    )]
    pub expire_at: Timestamp,
}

impl LinkRecord {
    /// Whether the record's expiry has elapsed at `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expire_at
    }
}

/// A read-only view of the link store.
///
/// The redirector only ever reads, so it takes this narrower trait.
#[async_trait]
pub trait ReadLinkStore: Send + Sync + 'static {
    /// Retrieves the record for an identifier.
    ///
    /// Returns `None` if the key is absent, including keys the backend
    /// has already expired.
    async fn get(&self, id: &ShortId) -> Result<Option<LinkRecord>>;
}

#[async_trait]
pub trait LinkStore: ReadLinkStore {
    /// Writes a record unconditionally, last-writer-wins.
    ///
    /// This is the backend's plain upsert: no existing-key check is made
    /// here. Collision handling, if any, is the writer's policy.
    async fn put(&self, id: &ShortId, record: LinkRecord) -> Result<()>;

    /// Checks whether an identifier is currently taken.
    ///
    /// Used by collision-checking write policies.
    async fn exists(&self, id: &ShortId) -> Result<bool>;
}

#[async_trait]
impl<S: ReadLinkStore> ReadLinkStore for Arc<S> {
    async fn get(&self, id: &ShortId) -> Result<Option<LinkRecord>> {
        (**self).get(id).await
    }
}

#[async_trait]
impl<S: LinkStore> LinkStore for Arc<S> {
    async fn put(&self, id: &ShortId, record: LinkRecord) -> Result<()> {
        (**self).put(id, record).await
    }

    async fn exists(&self, id: &ShortId) -> Result<bool> {
        (**self).exists(id).await
    }
}
