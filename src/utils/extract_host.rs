//! Host extraction from HTTP requests.

use axum::http::{HeaderMap, Uri, header};

/// Returns the host (including port) the client addressed.
///
/// Looks at the `Host` header first and falls back to the authority of the
/// request URI, which is where HTTP/2 clients put it. Unlike domain routing,
/// the port is kept: short URLs must point back at the exact address used.
///
/// Returns `None` if neither is present or the header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8080".parse().unwrap());
///
/// let host = extract_host(&headers, &Uri::from_static("/api/shorten"));
/// assert_eq!(host.as_deref(), Some("localhost:8080"));
/// ```
pub fn extract_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let from_header = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty());

    from_header
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .map(str::to_string)
}
