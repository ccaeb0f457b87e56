use serde::{Deserialize, Serialize};

/// The authenticated GitHub account, as returned by `GET /user`. Unknown
/// fields from the origin are dropped on deserialization, so the cached
/// representation is already trimmed to what the dashboard needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub organizations_url: String,
}

/// Trimmed projection of an organisation the user belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    pub login: String,
    pub repos_url: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
