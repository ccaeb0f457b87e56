pub mod auth;
pub mod dashboard;
pub mod health;

pub use auth::{logout, oauth_callback};
pub use dashboard::dashboard;
pub use health::health_check;
