use axum::http::{header, HeaderMap};

pub const SESSION_COOKIE: &str = "sid";

/// Pull the session id out of the Cookie header, if present.
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// Set-Cookie value clearing the session.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_id_found_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; sid=abc-123; lang=en");
        assert_eq!(session_id(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_or_empty_cookie_is_none() {
        assert!(session_id(&HeaderMap::new()).is_none());
        assert!(session_id(&headers_with_cookie("theme=dark")).is_none());
        assert!(session_id(&headers_with_cookie("sid=")).is_none());
    }

    #[test]
    fn test_cookie_round_trip() {
        let set = session_cookie("abc-123");
        assert!(set.starts_with("sid=abc-123;"));
        assert!(set.contains("HttpOnly"));

        let clear = clear_session_cookie();
        assert!(clear.contains("Max-Age=0"));
    }
}
