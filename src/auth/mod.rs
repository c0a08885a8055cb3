mod crypto;
mod db;
mod extractor;
mod middleware;

pub use crypto::{hash_password, verify_password};
pub use db::create_session;
pub use extractor::AuthUser;
pub use middleware::require_auth;

use axum::http::{header, HeaderMap};

/// Pull the bearer token out of the Authorization header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header")?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or("Invalid Authorization header format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extracts_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(bearer_token(&headers), Ok("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), Err("Missing Authorization header"));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(
            bearer_token(&headers),
            Err("Invalid Authorization header format")
        );
    }
}
