//! Resolution of the public base URL that short links point back to.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;
use url::Url;

/// Resolves the base URL used to build short links for a request.
///
/// A configured `BASE_URL` always wins. Otherwise the base is derived as
/// `http://{host}`, keeping any port so the link routes back to this server.
/// The host comes from the `Host` header, or from the request URI authority
/// when the header is absent (HTTP/2 carries it as `:authority`).
///
/// The result never ends with a slash.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value contains invalid UTF-8
/// - The host is not a bare `host[:port]` authority
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8080".parse().unwrap());
///
/// let base = resolve_base_url(None, &headers, &Uri::from_static("/shorten")).unwrap();
/// assert_eq!(base, "http://s.example.com:8080");
/// ```
pub fn resolve_base_url(
    configured: Option<&str>,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?,
        None => uri
            .authority()
            .map(|authority| authority.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    let base = format!("http://{host}");

    let is_bare_authority = Url::parse(&base).is_ok_and(|url| {
        url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none()
            && url.username().is_empty()
            && !base.ends_with('/')
    });

    if !is_bare_authority {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host }),
        ));
    }

    Ok(base)
}

/// Joins a resolved base URL and a short code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{base}/{code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, Uri, header};

    fn path_only() -> Uri {
        Uri::from_static("/shorten")
    }

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_configured_base_url_wins() {
        let headers = headers_with_host("internal:3000");

        let result = resolve_base_url(Some("https://s.example.com/"), &headers, &path_only());
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_configured_base_url_without_host() {
        let result = resolve_base_url(Some("https://s.example.com"), &HeaderMap::new(), &path_only());
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_host_header_simple() {
        let result = resolve_base_url(None, &headers_with_host("example.com"), &path_only());
        assert_eq!(result.unwrap(), "http://example.com");
    }

    #[test]
    fn test_host_header_keeps_port() {
        let result = resolve_base_url(None, &headers_with_host("localhost:3000"), &path_only());
        assert_eq!(result.unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_host_header_ipv6_with_port() {
        let result = resolve_base_url(None, &headers_with_host("[::1]:8080"), &path_only());
        assert_eq!(result.unwrap(), "http://[::1]:8080");
    }

    #[test]
    fn test_missing_host_header() {
        let result = resolve_base_url(None, &HeaderMap::new(), &path_only());
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_host_header_with_path() {
        let result = resolve_base_url(None, &headers_with_host("evil.com/phish"), &path_only());
        assert!(result.is_err());
    }

    #[test]
    fn test_host_header_with_userinfo() {
        let result = resolve_base_url(None, &headers_with_host("user@evil.com"), &path_only());
        assert!(result.is_err());
    }

    #[test]
    fn test_host_header_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            let result = resolve_base_url(None, &headers, &path_only());
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_short_url() {
        assert_eq!(short_url("http://localhost:3000", "ba"), "http://localhost:3000/ba");
    }

    #[test]
    fn test_uri_authority_when_host_header_absent() {
        let uri = Uri::from_static("http://localhost:3000/shorten?url=nintex.com");

        let result = resolve_base_url(None, &HeaderMap::new(), &uri);
        assert_eq!(result.unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_host_header_preferred_over_uri_authority() {
        let uri = Uri::from_static("http://internal:8080/shorten");

        let result = resolve_base_url(None, &headers_with_host("s.example.com"), &uri);
        assert_eq!(result.unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_uri_authority_with_userinfo() {
        let uri = Uri::from_static("http://user@evil.com/shorten");

        let result = resolve_base_url(None, &HeaderMap::new(), &uri);
        assert!(result.is_err());
    }
}
