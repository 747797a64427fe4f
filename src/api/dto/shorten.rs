//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Message for an empty or truncated request body.
pub const UNEXPECTED_END_OF_JSON: &str = "unexpected end of JSON input";

/// Message for a body without a string `url` field.
pub const URL_MISSING: &str = "`url` is a non-string or missing";

/// Request to shorten a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

impl ShortenRequest {
    /// Parses a raw request body.
    ///
    /// The body is read as untyped JSON first so that each failure gets its
    /// own message:
    ///
    /// - empty or truncated body: "unexpected end of JSON input"
    /// - other syntax errors: the parser's description
    /// - `url` absent, not a string, or body not an object: "`url` is a non-string or missing"
    ///
    /// Whether the URL itself is well formed is checked later by
    /// [`crate::application::services::LinkService::shorten`].
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            if e.is_eof() {
                AppError::bad_request(UNEXPECTED_END_OF_JSON)
            } else {
                AppError::bad_request(e.to_string())
            }
        })?;

        match value.get("url") {
            Some(Value::String(url)) => Ok(Self { url: url.clone() }),
            _ => Err(AppError::bad_request(URL_MISSING)),
        }
    }
}

/// Data of a successful shorten response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenData {
    #[serde(rename = "shortURL")]
    pub short_url: String,
}
