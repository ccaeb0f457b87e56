use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;

/// Description of one upstream request.
///
/// Extra `headers` are applied after the defaults, so callers can override
/// anything the fetcher would otherwise set.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub token: Option<String>,
    pub headers: HeaderMap,
    pub form: Option<Vec<(String, String)>>,
    pub accept_json: bool,
}

impl RequestDescriptor {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            token: None,
            headers: HeaderMap::new(),
            form: None,
            accept_json: false,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            ..Self::get(url)
        }
    }

    /// Attach a GitHub-style access token (sent as `Authorization: token ...`).
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = Some(form);
        self
    }

    /// Ask the origin for a JSON representation.
    pub fn accept_json(mut self) -> Self {
        self.accept_json = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults() {
        let request = RequestDescriptor::get("https://api.github.com/user");

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.github.com/user");
        assert!(request.token.is_none());
        assert!(request.headers.is_empty());
        assert!(!request.accept_json);
    }

    #[test]
    fn test_builder_chain() {
        let request = RequestDescriptor::post("https://example.test/token")
            .with_token("t0ken")
            .accept_json()
            .with_form(vec![("code".to_string(), "abc".to_string())]);

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.token.as_deref(), Some("t0ken"));
        assert!(request.accept_json);
        assert_eq!(request.form.as_ref().unwrap().len(), 1);
    }
}
