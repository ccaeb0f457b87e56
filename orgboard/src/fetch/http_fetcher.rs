use super::descriptor::RequestDescriptor;
use super::response::RawResponse;
use super::Fetcher;
use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, ETAG, IF_NONE_MATCH, USER_AGENT,
};
use reqwest::Client;
use shared::{Error, Result};
use tracing::debug;

/// Reqwest-backed `Fetcher`.
///
/// Built once at startup and shared; holds the connection pool. GitHub
/// requires a User-Agent on every request, so one is always attached.
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Fetch(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

/// Assemble headers in override order: defaults, then auth, then the
/// revalidation token, then caller-supplied extras last.
fn build_headers(
    user_agent: &str,
    request: &RequestDescriptor,
    if_none_match: Option<&str>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| Error::Fetch(format!("invalid user agent: {}", e)))?,
    );

    if request.accept_json {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }

    if let Some(token) = &request.token {
        // GitHub's token scheme, not `Bearer`
        let mut value = HeaderValue::from_str(&format!("token {}", token))
            .map_err(|e| Error::Fetch(format!("invalid access token: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    if let Some(etag) = if_none_match {
        headers.insert(
            IF_NONE_MATCH,
            HeaderValue::from_str(etag)
                .map_err(|e| Error::Fetch(format!("invalid revalidation token: {}", e)))?,
        );
    }

    for (name, value) in request.headers.iter() {
        headers.insert(name.clone(), value.clone());
    }

    Ok(headers)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn send(
        &self,
        request: RequestDescriptor,
        if_none_match: Option<&str>,
    ) -> Result<RawResponse> {
        let headers = build_headers(&self.user_agent, &request, if_none_match)?;

        debug!(url = %request.url, method = %request.method, conditional = if_none_match.is_some(), "requesting origin");

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(headers);

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("request to {} failed: {}", request.url, e)))?;

        let status = response.status().as_u16();
        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            Error::Fetch(format!("failed to read body from {}: {}", request.url, e))
        })?;

        Ok(RawResponse { status, etag, body })
    }
}
