// Public API
pub mod conditional;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use conditional::ConditionalCache;
pub use record::CacheRecord;
pub use store::RecordStore;
