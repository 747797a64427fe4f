//! Handler for link shortening endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Uri},
};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::shorten::{ShortenData, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// The body is read raw rather than through the `Json` extractor, so a
/// `Content-Type` header is not required and parse failures keep their own
/// messages.
///
/// # Request Body
///
/// ```json
/// { "url": "http://bbc.co.uk" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "data": { "shortURL": "http://localhost:8080/ABC1" } }
/// ```
///
/// The host part is taken from the request's `Host` header, falling back to
/// the configured public host.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing or not
/// a string, or `url` is not a valid absolute URL.
///
/// Returns 500 Internal Server Error if the manifest cannot be read or
/// saved, or no free code was found.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<Json<Envelope<ShortenData>>, AppError> {
    let request = ShortenRequest::from_body(&body)?;

    let shortened = state.link_service.shorten(&request.url).await?;

    let host = extract_host(&headers, &uri).unwrap_or_else(|| state.public_host.to_string());
    let short_url = state.link_service.short_url(&host, shortened.short());

    Ok(Json(Envelope::ok(ShortenData { short_url })))
}
