// Public API
pub mod session;
pub mod store;

// Re-export commonly used types
pub use session::{Session, SessionId};
pub use store::SessionStore;
