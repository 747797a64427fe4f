//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **301 Moved Permanently** with `Location` set to the stored URL, empty body
/// - **404 Not Found** with an empty body if the code is unknown
/// - **500 Internal Server Error** (JSON envelope) if the manifest cannot be read
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    match state.link_service.resolve(&code).await {
        Ok(shortened) => match location_header(shortened.long()) {
            Some(location) => {
                debug!(code = %code, "redirecting");
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
            }
            None => {
                error!(code = %code, "stored URL cannot be sent as a Location header");
                AppError::internal("Stored URL cannot be used as a redirect target")
                    .into_response()
            }
        },
        Err(AppError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Responds to the bare root path, which never names a short code.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Builds the `Location` header value for a stored URL.
///
/// The URL is sent byte-for-byte as stored; header values accept non-ASCII
/// bytes, so Unicode hosts and paths pass through unchanged. Only a value
/// with bytes a header cannot carry (control characters) falls back to the
/// serialized form from [`Url`].
fn location_header(long_url: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(long_url).ok().or_else(|| {
        Url::parse(long_url)
            .ok()
            .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_ascii_untouched() {
        let value = location_header("http://bbc.co.uk").unwrap();
        assert_eq!(value, "http://bbc.co.uk");
    }

    #[test]
    fn test_location_header_unicode_sent_as_stored() {
        let value = location_header("http://bücher.example/straße").unwrap();
        assert_eq!(value.as_bytes(), "http://bücher.example/straße".as_bytes());
    }

    #[test]
    fn test_location_header_control_char_serialized() {
        // U+0001 is not a valid header byte; the URL parser percent-encodes it
        let value = location_header("http://bbc.co.uk/a\u{1}b").unwrap();
        assert_eq!(value, "http://bbc.co.uk/a%01b");
    }

    #[test]
    fn test_location_header_unusable() {
        assert!(location_header("not a url \u{7f}").is_none());
    }
}
