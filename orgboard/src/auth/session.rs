use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Session id handed to the browser as a cookie value.
pub type SessionId = String;

/// A signed-in browser session holding the GitHub access token.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: SessionId,
    pub access_token: String,
    pub scope: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            access_token: access_token.into(),
            scope: scope.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new("gho_1", "read:org");
        let b = Session::new("gho_1", "read:org");

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.access_token, "gho_1");
    }
}
