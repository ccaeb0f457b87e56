use super::models::{Organisation, User};
use super::oauth::{self, AccessToken};
use crate::cache::ConditionalCache;
use crate::fetch::{origin_error, Fetcher, RequestDescriptor};
use shared::config::GithubOAuth;
use shared::{Error, Result};
use std::sync::Arc;
use tracing::debug;

pub const API_USER_URL: &str = "https://api.github.com/user";

/// Typed GitHub API surface for the dashboard.
///
/// Reads go through the conditional cache; the OAuth code exchange goes
/// straight to the fetcher since its response must never be cached.
pub struct GithubClient {
    cache: ConditionalCache,
    fetcher: Arc<dyn Fetcher>,
    oauth: GithubOAuth,
    external_url: String,
}

impl GithubClient {
    pub fn new(
        cache: ConditionalCache,
        fetcher: Arc<dyn Fetcher>,
        oauth: GithubOAuth,
        external_url: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            fetcher,
            oauth,
            external_url: external_url.into(),
        }
    }

    /// Authorize URL to send a signed-out user to.
    pub fn login_url(&self) -> String {
        oauth::login_url(&self.oauth, &self.external_url)
    }

    /// The account behind `token`, revalidated against the origin.
    pub async fn get_user(&self, token: &str) -> Result<User> {
        let request = RequestDescriptor::get(API_USER_URL)
            .with_token(token)
            .accept_json();

        self.cache
            .fetch(&format!("token-{}", token), request, |response| {
                response.json::<User>()
            })
            .await
    }

    /// Organisations `user` belongs to, trimmed to the dashboard projection
    /// before caching.
    pub async fn get_organisations(&self, token: &str, user: &User) -> Result<Vec<Organisation>> {
        let request = RequestDescriptor::get(&user.organizations_url)
            .with_token(token)
            .accept_json();

        self.cache
            .fetch(&format!("user-{}", user.login), request, |response| {
                response.json::<Vec<Organisation>>()
            })
            .await
    }

    /// Exchange an OAuth callback `code` for an access token.
    ///
    /// GitHub answers 200 even for a rejected code, with an error-shaped
    /// body, so both the status and the body are checked.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        let request = RequestDescriptor::post(oauth::ACCESS_TOKEN_URL)
            .accept_json()
            .with_form(vec![
                ("client_id".to_string(), self.oauth.client_id.clone()),
                ("client_secret".to_string(), self.oauth.client_secret.clone()),
                ("code".to_string(), code.to_string()),
            ]);

        let response = self.fetcher.send(request, None).await?;

        if response.status > 300 {
            return Err(origin_error(oauth::ACCESS_TOKEN_URL, &response));
        }

        let body = response.json_value().ok_or_else(|| {
            Error::Transform("access token response was not JSON".to_string())
        })?;

        if body.get("error").is_some() {
            return Err(origin_error(oauth::ACCESS_TOKEN_URL, &response));
        }

        debug!("exchanged oauth code for access token");
        response.json::<AccessToken>()
    }
}
