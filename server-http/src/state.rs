use orgboard::auth::SessionStore;
use orgboard::github::GithubClient;
use std::sync::Arc;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GithubClient>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(github: Arc<GithubClient>, sessions: Arc<SessionStore>) -> Self {
        Self { github, sessions }
    }
}
