//! Repository trait for shortened URL storage.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::ShortenedUrl;

/// Storage for the long URL → short code manifest.
///
/// Entries are only ever added; there is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileManifestRepository`] - whole-file JSON manifest
/// - [`crate::infrastructure::persistence::InMemoryRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_file.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenedUrlRepository: Send + Sync {
    /// Stores a new pair and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Empty`] if the long URL or the code is empty.
    ///
    /// Returns [`RepositoryError::AlreadyExists`] if the long URL already has a code.
    ///
    /// Returns [`RepositoryError::CodeTaken`] if the code belongs to another long URL.
    ///
    /// Returns [`RepositoryError::Persist`] if the manifest could not be saved.
    async fn create(&self, url: ShortenedUrl) -> Result<ShortenedUrl, RepositoryError>;

    /// Finds the pair whose short code is `code`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no entry uses the code.
    async fn retrieve_by_short_code(&self, code: &str) -> Result<ShortenedUrl, RepositoryError>;

    /// Finds the pair for an already shortened long URL.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the URL has not been shortened.
    async fn retrieve_by_long_url(&self, long_url: &str)
    -> Result<ShortenedUrl, RepositoryError>;

    /// Number of entries in the manifest.
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// Short backend name used in logs and the health check.
    fn kind(&self) -> &'static str;
}
