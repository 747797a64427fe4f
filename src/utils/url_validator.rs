//! Validation of submitted long URLs.

use url::Url;

/// Errors returned by [`validate_long_url`].
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL contains whitespace or control characters")]
    IllegalCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` is a syntactically well-formed absolute URI.
///
/// The URL is checked, not rewritten: callers store the string exactly as
/// submitted, so `http://bbc.co.uk` and `http://bbc.co.uk/` are different
/// entries.
///
/// # Rules
///
/// 1. Must not be empty
/// 2. Must not contain whitespace or control characters (the parser would
///    silently strip them)
/// 3. Must parse as an absolute URL with a scheme; relative references such as
///    `bbc.co.uk` or `http//bbc.co.uk` are rejected
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("http://bbc.co.uk").is_ok());
/// assert!(validate_long_url("http//bbc.co.uk").is_err());
/// ```
pub fn validate_long_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(UrlValidationError::IllegalCharacter);
    }

    Ok(Url::parse(input)?)
}
