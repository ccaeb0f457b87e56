use std::time::Duration;
use tracing::warn;

/// GitHub OAuth application credentials.
#[derive(Clone, Debug)]
pub struct GithubOAuth {
    pub client_id: String,
    pub client_secret: String,
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    /// Base URL the OAuth callback redirects back to (no trailing slash).
    pub external_url: String,
    pub session_ttl: Duration,
    pub github: GithubOAuth,
}

impl Config {
    const DEFAULT_DATA_DIR: &'static str = "./data";
    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

    pub fn from_env() -> Self {
        let host = std::env::var("ORGBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("ORGBOARD_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(Self::DEFAULT_PORT);
        let external_url = std::env::var("ORGBOARD_EXTERNAL_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));
        let session_ttl = std::env::var("ORGBOARD_SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(Self::DEFAULT_SESSION_TTL_SECS));

        let client_id = std::env::var("GITHUB_CLIENT_ID").unwrap_or_else(|_| {
            warn!("GITHUB_CLIENT_ID not set, GitHub login will fail");
            String::new()
        });
        let client_secret = std::env::var("GITHUB_CLIENT_SECRET").unwrap_or_else(|_| {
            warn!("GITHUB_CLIENT_SECRET not set, GitHub login will fail");
            String::new()
        });

        Self {
            host,
            port,
            data_dir: std::env::var("ORGBOARD_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
            external_url: external_url.trim_end_matches('/').to_string(),
            session_ttl,
            github: GithubOAuth {
                client_id,
                client_secret,
            },
        }
    }
}
