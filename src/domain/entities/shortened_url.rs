//! Shortened URL entity.

/// A long URL together with the short code that resolves to it.
///
/// Fields are private so that a pair, once built, cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    long: String,
    short: String,
}

impl ShortenedUrl {
    pub fn new(long: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short: short.into(),
        }
    }

    /// The original URL.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The short code.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Returns true if either half of the pair is empty.
    pub fn is_empty(&self) -> bool {
        self.long.is_empty() || self.short.is_empty()
    }
}
