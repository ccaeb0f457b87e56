use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{Error, Result};

/// One cached upstream response per key.
///
/// `etag` and `value` always travel together: a record is written whole and
/// overwritten whole, so a token update without a matching value update is
/// never observable. `value` is the caller-processed representation, never the
/// raw origin body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheRecord {
    pub key: String,
    pub etag: Option<String>,
    pub value: String,
    pub fetched_at: DateTime<Utc>,
}

impl CacheRecord {
    pub fn new(key: impl Into<String>, etag: Option<String>, value: String) -> Self {
        Self {
            key: key.into(),
            etag,
            value,
            fetched_at: Utc::now(),
        }
    }

    /// Serialize a processed value into a record for `key`.
    pub fn from_value<T: Serialize>(key: &str, etag: Option<String>, value: &T) -> Result<Self> {
        let value = serde_json::to_string(value)
            .map_err(|e| Error::Store(format!("failed to serialize value for '{}': {}", key, e)))?;
        Ok(Self::new(key, etag, value))
    }

    /// Decode the stored value. Failure is surfaced as record corruption,
    /// never treated as a cache miss.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.value).map_err(|e| {
            Error::Decode(format!(
                "stored value for '{}' is corrupt: {}",
                self.key, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trips_processed_value() {
        let record =
            CacheRecord::from_value("user-octocat", Some("\"abc\"".to_string()), &vec![1, 2, 3])
                .unwrap();

        assert_eq!(record.key, "user-octocat");
        assert_eq!(record.etag.as_deref(), Some("\"abc\""));

        let decoded: Vec<i32> = record.decode().unwrap();
        assert_eq!(decoded, vec![1, 2, 3]);
    }

    #[test]
    fn test_corrupt_value_is_a_decode_error() {
        let record = CacheRecord::new("user-octocat", None, "not json".to_string());

        let err = record.decode::<Vec<i32>>().unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
