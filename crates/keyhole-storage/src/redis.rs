use async_trait::async_trait;
use jiff::Timestamp;
use keyhole_core::error::Result;
use keyhole_core::{LinkRecord, LinkStore, ReadLinkStore, ShortId, StorageError};
use redis::AsyncCommands;
use tracing::{debug, trace, warn};

/// Redis-backed link store.
///
/// Records are stored as JSON strings under `"<table>:<short_id>"` keys,
/// where `<table>` is the configured table namespace. Expiry belongs to
/// the backend: `put` derives the key's TTL from the record's `expire_at`
/// and Redis drops the key on its own once it elapses, so readers never
/// re-check expiry here.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    table: String,
}

impl RedisStore {
    /// Creates a store over an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection, table: impl Into<String>) -> Self {
        Self {
            conn,
            table: table.into(),
        }
    }

    /// Creates a store by opening a new connection to `redis_url`.
    pub async fn connect(redis_url: &str, table: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("failed to parse redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to redis", e))?;
        Ok(Self::new(conn, table))
    }

    fn key(&self, id: &ShortId) -> String {
        storage_key(&self.table, id)
    }
}

/// Builds the backend key for an identifier within a table namespace.
fn storage_key(table: &str, id: &ShortId) -> String {
    format!("{table}:{id}")
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_connection_dropped() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

#[async_trait]
impl ReadLinkStore for RedisStore {
    async fn get(&self, id: &ShortId) -> Result<Option<LinkRecord>> {
        let key = self.key(id);
        trace!(id = %id, "fetching record");

        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(&key).await.map_err(|e| {
            warn!(id = %id, error = %e, "redis get failed");
            map_redis_error("failed to fetch record", e)
        })?;

        let Some(raw) = raw else {
            trace!(id = %id, "record not found");
            return Ok(None);
        };

        let record = serde_json::from_str::<LinkRecord>(&raw).map_err(|e| {
            warn!(id = %id, error = %e, "stored record failed to deserialize");
            StorageError::InvalidData(format!("invalid stored value for key '{key}': {e}"))
        })?;

        Ok(Some(record))
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn put(&self, id: &ShortId, record: LinkRecord) -> Result<()> {
        let key = self.key(id);
        trace!(id = %id, "writing record");

        let json = serde_json::to_string(&record)
            .map_err(|e| StorageError::InvalidData(format!("failed to serialize record: {e}")))?;

        // The remaining lifetime is computed here, but enforcement is the
        // backend's: the key disappears when the TTL runs out. Records
        // always expire after creation, so the floor only matters if the
        // wall clock jumped between record assembly and this write.
        let remaining = record.expire_at.as_second() - Timestamp::now().as_second();
        let ttl_seconds = remaining.max(1) as u64;

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(&key, json, ttl_seconds)
            .await
            .map_err(|e| {
                warn!(id = %id, error = %e, "redis set failed");
                map_redis_error("failed to write record", e)
            })?;

        debug!(id = %id, ttl_seconds, "record written");
        Ok(())
    }

    async fn exists(&self, id: &ShortId) -> Result<bool> {
        let key = self.key(id);

        let mut conn = self.conn.clone();
        let taken: bool = conn
            .exists(&key)
            .await
            .map_err(|e| map_redis_error("failed to probe key", e))?;
        Ok(taken)
    }
}
