// Public API
pub mod descriptor;
pub mod http_fetcher;
pub mod response;

// Re-export commonly used types
pub use descriptor::RequestDescriptor;
pub use http_fetcher::HttpFetcher;
pub use response::{origin_error, RawResponse};

use async_trait::async_trait;
use shared::Result;

/// Outbound HTTP port.
///
/// `send` issues exactly one request and returns `Ok` for any HTTP status;
/// only transport-level failures map to `Error::Fetch`. Status classification
/// belongs to the caller.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    async fn send(
        &self,
        request: RequestDescriptor,
        if_none_match: Option<&str>,
    ) -> Result<RawResponse>;
}
