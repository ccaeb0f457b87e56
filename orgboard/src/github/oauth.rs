use reqwest::Url;
use serde::Deserialize;
use shared::config::GithubOAuth;
use uuid::Uuid;

pub const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const ACCESS_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// Scopes the dashboard asks for: private repos and org membership.
pub const SCOPES: &str = "repo,read:org";

/// Successful response from the access token exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub scope: String,
}

/// Build the GitHub authorize URL for this app. A fresh uuid `state` is
/// embedded on every call.
pub fn login_url(oauth: &GithubOAuth, external_url: &str) -> String {
    let state = Uuid::new_v4().to_string();
    let redirect_uri = format!("{}/login", external_url);

    let url = Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", oauth.client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("scope", SCOPES),
            ("state", state.as_str()),
        ],
    )
    .expect("authorize URL is valid");

    url.to_string()
}
