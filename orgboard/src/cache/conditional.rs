use super::record::CacheRecord;
use super::store::RecordStore;
use crate::fetch::{origin_error, Fetcher, RawResponse, RequestDescriptor};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Error, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Freshness-checked fetching over a persistent record store.
///
/// Every call performs one store read, one conditional origin request and at
/// most one store write. When the origin answers 304 the stored value is
/// served as-is; any fresh body runs through the caller's transform and the
/// result is cached, whole record overwritten, for next time.
///
/// The component itself is stateless, so concurrent calls need no locking
/// here. Two concurrent calls for the same key may both revalidate and both
/// write; last write wins. Records are never expired or evicted.
#[derive(Clone)]
pub struct ConditionalCache {
    store: Arc<dyn RecordStore>,
    fetcher: Arc<dyn Fetcher>,
}

impl ConditionalCache {
    pub fn new(store: Arc<dyn RecordStore>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { store, fetcher }
    }

    /// Fetch the resource described by `request`, revalidating any cached
    /// value for `key` against the origin.
    ///
    /// `transform` converts a fresh origin response into the value to cache
    /// and return; it is never invoked when the origin confirms the cached
    /// value is current.
    pub async fn fetch<T, F>(
        &self,
        key: &str,
        request: RequestDescriptor,
        transform: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&RawResponse) -> Result<T>,
    {
        let started = Instant::now();

        // Store failure is terminal; no silent fallback to an uncached fetch.
        let record = self.store.get(key).await?;
        let token = record.as_ref().and_then(|r| r.etag.as_deref());

        let url = request.url.clone();
        let response = self.fetcher.send(request, token).await?;

        if response.status == 304 {
            // The origin only answers 304 to a token we sent it, so a missing
            // record here means the store lost data under our feet.
            let record = record.ok_or_else(|| {
                Error::Decode(format!(
                    "origin confirmed '{}' unchanged but no record is stored",
                    key
                ))
            })?;
            let value = record.decode()?;
            debug!(
                key,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "serving revalidated cache entry"
            );
            return Ok(value);
        }

        if response.status > 300 {
            return Err(origin_error(&url, &response));
        }

        let value = transform(&response)?;

        let record = CacheRecord::from_value(key, response.etag.clone(), &value)?;
        self.store.put(record).await?;

        debug!(
            key,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched and cached fresh value"
        );
        Ok(value)
    }
}
