use super::record::CacheRecord;
use async_trait::async_trait;
use shared::Result;

/// Persistence port for cache records.
///
/// An absent record is a normal cold-cache state; I/O failures surface as
/// `Error::Store`. Per-key atomicity of a single `get`/`put` is the store's
/// responsibility, the cache layer holds no locks of its own.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<CacheRecord>>;

    /// Overwrite any prior record for the same key.
    async fn put(&self, record: CacheRecord) -> Result<()>;
}
