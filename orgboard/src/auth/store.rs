use super::session::{Session, SessionId};
use moka::future::Cache;
use std::time::Duration;

/// Moka-based in-memory session store with TTL eviction.
///
/// Deliberately not persisted: losing sessions on restart just sends the user
/// back through the OAuth login.
pub struct SessionStore {
    sessions: Cache<SessionId, Session>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Cache::builder().time_to_live(ttl).build(),
        }
    }

    /// Create and store a session for a freshly exchanged access token.
    pub async fn create(
        &self,
        access_token: impl Into<String>,
        scope: impl Into<String>,
    ) -> Session {
        let session = Session::new(access_token, scope);
        self.sessions.insert(session.id.clone(), session.clone()).await;
        session
    }

    pub async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.get(id).await
    }

    /// Returns whether a session existed for `id`.
    pub async fn invalidate(&self, id: &str) -> bool {
        self.sessions.remove(id).await.is_some()
    }
}
