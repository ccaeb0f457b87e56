// Public API
pub mod client;
pub mod models;
pub mod oauth;

// Re-export commonly used types
pub use client::GithubClient;
pub use models::{Organisation, User};
pub use oauth::{login_url, AccessToken};
