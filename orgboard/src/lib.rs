pub mod auth;
pub mod cache;
pub mod fetch;
pub mod github;
pub mod persistence;
