use bytes::Bytes;
use serde::de::DeserializeOwned;
use shared::{Error, Result};

/// Status, revalidation token and body of one origin response.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub etag: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    /// Parse the body as JSON into `T`. Failure maps to `Error::Transform`
    /// since this is how caller transforms consume fresh bodies.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| Error::Transform(format!("failed to parse response body: {}", e)))
    }

    /// Best-effort JSON view of the body, `None` when it is not JSON.
    pub fn json_value(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Classify an error-range response as `Error::Origin`.
///
/// When the body is an error-shaped JSON object the machine-readable
/// `error` / `error_description` / `error_uri` fields are surfaced; otherwise
/// a generic message carries the URL and status code.
pub fn origin_error(url: &str, response: &RawResponse) -> Error {
    if let Some(body) = response.json_value() {
        let identifier = body.get("error").and_then(|v| v.as_str());
        let description = body.get("error_description").and_then(|v| v.as_str());

        if identifier.is_some() || description.is_some() {
            return Error::Origin {
                status: response.status,
                message: description
                    .or(identifier)
                    .unwrap_or("origin rejected the request")
                    .to_string(),
                identifier: identifier.map(str::to_string),
                uri: body
                    .get("error_uri")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
            };
        }
    }

    Error::Origin {
        status: response.status,
        message: format!("unable to request {}: {}", url, response.status),
        identifier: None,
        uri: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            etag: None,
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    #[test]
    fn test_error_shaped_body_is_surfaced() {
        let body = r#"{
            "error": "bad_verification_code",
            "error_description": "The code passed is incorrect or expired.",
            "error_uri": "https://docs.github.com/troubleshooting"
        }"#;

        let err = origin_error("https://github.com/login/oauth/access_token", &response(400, body));

        match err {
            Error::Origin {
                status,
                message,
                identifier,
                uri,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "The code passed is incorrect or expired.");
                assert_eq!(identifier.as_deref(), Some("bad_verification_code"));
                assert_eq!(uri.as_deref(), Some("https://docs.github.com/troubleshooting"));
            }
            other => panic!("expected origin error, got {:?}", other),
        }
    }

    #[test]
    fn test_identifier_without_description_is_the_message() {
        let err = origin_error("https://x.test", &response(401, r#"{"error": "bad_credentials"}"#));

        match err {
            Error::Origin {
                message, identifier, ..
            } => {
                assert_eq!(message, "bad_credentials");
                assert_eq!(identifier.as_deref(), Some("bad_credentials"));
            }
            other => panic!("expected origin error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_body_falls_back_to_generic_message() {
        let err = origin_error("https://api.github.com/user", &response(502, "Bad Gateway"));

        match err {
            Error::Origin {
                status,
                message,
                identifier,
                uri,
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "unable to request https://api.github.com/user: 502");
                assert!(identifier.is_none());
                assert!(uri.is_none());
            }
            other => panic!("expected origin error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_body_without_error_fields_is_generic() {
        let err = origin_error("https://x.test", &response(500, r#"{"message": "boom"}"#));

        match err {
            Error::Origin { identifier, .. } => assert!(identifier.is_none()),
            other => panic!("expected origin error, got {:?}", other),
        }
    }
}
