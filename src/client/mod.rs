//! HTTP client for a running shortener service.
//!
//! Used by the `shortener-cli` binary. The client speaks the same JSON
//! envelope the API layer produces and never follows redirects, so the
//! `Location` of a short link can be inspected.

pub mod browser;

use reqwest::{StatusCode, header, redirect};
use thiserror::Error;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::shorten::ShortenRequest;

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please supply a URL to shorten")]
    MissingUrl,

    #[error("Please supply a short code to redirect to")]
    MissingCode,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a JSON envelope.
    #[error("Status {status}, {message}")]
    MalformedResponse { status: u16, message: String },

    /// The service answered with an `err` envelope.
    #[error("{0}")]
    Api(String),

    #[error("Shortcode {0} does not refer to a short URL")]
    UnknownShortCode(String),

    #[error("Unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("Unknown redirect location")]
    MissingLocation,

    #[error("Failed to launch {0} :(")]
    Launch(String),
}

pub struct ShortenerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShortenerClient {
    /// Creates a client for the service at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the service to shorten `long_url` and returns the short URL.
    pub async fn shorten(&self, long_url: &str) -> Result<String, ClientError> {
        if long_url.is_empty() {
            return Err(ClientError::MissingUrl);
        }

        let request = ShortenRequest {
            url: long_url.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/api/shorten", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        parse_shorten_response(status, &body)
    }

    /// Looks up where `code` redirects to without following the redirect.
    pub async fn resolve(&self, code: &str) -> Result<String, ClientError> {
        if code.is_empty() {
            return Err(ClientError::MissingCode);
        }

        let response = self
            .http
            .get(format!("{}/{}", self.base_url, code))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::UnknownShortCode(code.to_string())),
            StatusCode::MOVED_PERMANENTLY => response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .ok_or(ClientError::MissingLocation),
            other => Err(ClientError::UnexpectedStatus(other.as_u16())),
        }
    }
}

fn parse_shorten_response(status: StatusCode, body: &[u8]) -> Result<String, ClientError> {
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_slice(body).map_err(|e| ClientError::MalformedResponse {
            status: status.as_u16(),
            message: e.to_string(),
        })?;

    let field = if envelope.is_ok() { "shortURL" } else { "message" };

    let value = envelope
        .data
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ClientError::MalformedResponse {
            status: status.as_u16(),
            message: format!("missing `{field}` in response"),
        })?;

    if envelope.is_ok() {
        Ok(value.to_string())
    } else {
        Err(ClientError::Api(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ShortenerClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_ok_envelope() {
        let body = br#"{"status":"ok","data":{"shortURL":"http://localhost:8080/ABC1"}}"#;

        let short = parse_shorten_response(StatusCode::OK, body).unwrap();
        assert_eq!(short, "http://localhost:8080/ABC1");
    }

    #[test]
    fn test_parse_err_envelope() {
        let body = br#"{"status":"err","data":{"message":"`url` is not a valid URL"}}"#;

        let err = parse_shorten_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.to_string(), "`url` is not a valid URL");
    }

    #[test]
    fn test_parse_non_json_reports_status() {
        let err = parse_shorten_response(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Status 502, "), "got: {message}");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::UnknownShortCode("ZZZZ".into()).to_string(),
            "Shortcode ZZZZ does not refer to a short URL"
        );
        assert_eq!(
            ClientError::UnexpectedStatus(500).to_string(),
            "Unexpected status 500"
        );
        assert_eq!(
            ClientError::MissingLocation.to_string(),
            "Unknown redirect location"
        );
        assert_eq!(
            ClientError::Launch("https://example.com".into()).to_string(),
            "Failed to launch https://example.com :("
        );
    }

    #[tokio::test]
    async fn test_empty_arguments_rejected_before_request() {
        let client = ShortenerClient::new(DEFAULT_API_URL).unwrap();

        assert!(matches!(
            client.shorten("").await,
            Err(ClientError::MissingUrl)
        ));
        assert!(matches!(
            client.resolve("").await,
            Err(ClientError::MissingCode)
        ));
    }
}
