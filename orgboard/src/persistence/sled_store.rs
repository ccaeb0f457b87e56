use crate::cache::{CacheRecord, RecordStore};
use async_trait::async_trait;
use shared::{Error, Result};
use std::path::Path;

/// Sled-based persistence for cache records
pub struct SledRecordStore {
    db: sled::Db,
}

impl SledRecordStore {
    /// Open the record database, creating the parent directory if needed.
    /// Opened once at startup and passed in wherever a `RecordStore` is
    /// needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("failed to create directory: {}", e)))?;
        }

        let db = sled::open(path)
            .map_err(|e| Error::Store(format!("failed to open record database: {}", e)))?;

        Ok(Self { db })
    }
}

#[async_trait]
impl RecordStore for SledRecordStore {
    async fn get(&self, key: &str) -> Result<Option<CacheRecord>> {
        let value = self
            .db
            .get(key.as_bytes())
            .map_err(|e| Error::Store(format!("failed to read record '{}': {}", key, e)))?;

        match value {
            Some(bytes) => {
                let record: CacheRecord = serde_json::from_slice(&bytes).map_err(|e| {
                    Error::Decode(format!("failed to deserialize record '{}': {}", key, e))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, record: CacheRecord) -> Result<()> {
        let value = serde_json::to_vec(&record).map_err(|e| {
            Error::Store(format!("failed to serialize record '{}': {}", record.key, e))
        })?;

        self.db
            .insert(record.key.as_bytes(), value)
            .map_err(|e| Error::Store(format!("failed to save record '{}': {}", record.key, e)))?;

        self.db
            .flush()
            .map_err(|e| Error::Store(format!("failed to flush database: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sled_store_put_get_and_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("records.sled");

        let store = SledRecordStore::new(&db_path).unwrap();

        // Cold cache
        assert!(store.get("token-abc").await.unwrap().is_none());

        // First write
        let record =
            CacheRecord::from_value("token-abc", Some("\"t1\"".to_string()), &"one".to_string())
                .unwrap();
        store.put(record).await.unwrap();

        let loaded = store.get("token-abc").await.unwrap().unwrap();
        assert_eq!(loaded.etag.as_deref(), Some("\"t1\""));
        assert_eq!(loaded.decode::<String>().unwrap(), "one");

        // Overwrite replaces the whole record
        let record =
            CacheRecord::from_value("token-abc", Some("\"t2\"".to_string()), &"two".to_string())
                .unwrap();
        store.put(record).await.unwrap();

        let loaded = store.get("token-abc").await.unwrap().unwrap();
        assert_eq!(loaded.etag.as_deref(), Some("\"t2\""));
        assert_eq!(loaded.decode::<String>().unwrap(), "two");
    }

    #[tokio::test]
    async fn test_sled_store_keys_are_independent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SledRecordStore::new(temp_dir.path().join("records.sled")).unwrap();

        let record = CacheRecord::from_value("token-abc", None, &1).unwrap();
        store.put(record).await.unwrap();

        assert!(store.get("token-abc").await.unwrap().is_some());
        assert!(store.get("user-octocat").await.unwrap().is_none());
    }
}
