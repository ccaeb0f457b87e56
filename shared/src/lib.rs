// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Record store lookup or write failed.
    #[error("store: {0}")]
    Store(String),

    /// Transport-level failure reaching the origin.
    #[error("fetch: {0}")]
    Fetch(String),

    /// Origin was reachable but rejected or errored the request. Carries the
    /// machine-readable identifier and diagnostic URI when the response body
    /// had them.
    #[error("{message}")]
    Origin {
        status: u16,
        message: String,
        identifier: Option<String>,
        uri: Option<String>,
    },

    /// Caller-supplied processing of a fresh response body failed.
    #[error("transform: {0}")]
    Transform(String),

    /// A stored value could not be deserialized. This is store corruption and
    /// is always surfaced, never treated as a cache miss.
    #[error("decode: {0}")]
    Decode(String),

    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
