//! In-memory implementation of the shortened URL repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Manifest, ShortenedUrl};
use crate::domain::repositories::{RepositoryError, ShortenedUrlRepository};

/// Repository that keeps the manifest in process memory.
///
/// Same semantics as the file backend, minus persistence. Used by tests and
/// by `STORAGE=memory` for throwaway instances.
#[derive(Default)]
pub struct InMemoryRepository {
    manifest: RwLock<Manifest>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `entries`.
    pub fn with_entries(entries: impl IntoIterator<Item = ShortenedUrl>) -> Self {
        Self {
            manifest: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Returns a copy of the current manifest.
    pub async fn snapshot(&self) -> Manifest {
        self.manifest.read().await.clone()
    }
}

#[async_trait]
impl ShortenedUrlRepository for InMemoryRepository {
    async fn create(&self, url: ShortenedUrl) -> Result<ShortenedUrl, RepositoryError> {
        self.manifest.write().await.insert(&url)?;
        Ok(url)
    }

    async fn retrieve_by_short_code(&self, code: &str) -> Result<ShortenedUrl, RepositoryError> {
        self.manifest
            .read()
            .await
            .find_by_short(code)
            .ok_or(RepositoryError::NotFound)
    }

    async fn retrieve_by_long_url(
        &self,
        long_url: &str,
    ) -> Result<ShortenedUrl, RepositoryError> {
        self.manifest
            .read()
            .await
            .get_by_long(long_url)
            .ok_or(RepositoryError::NotFound)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.manifest.read().await.len())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_retrieve() {
        let repo = InMemoryRepository::new();

        let created = repo
            .create(ShortenedUrl::new("http://bbc.co.uk", "ABC1"))
            .await
            .unwrap();
        assert_eq!(created.short(), "ABC1");

        let by_code = repo.retrieve_by_short_code("ABC1").await.unwrap();
        assert_eq!(by_code.long(), "http://bbc.co.uk");

        let by_long = repo.retrieve_by_long_url("http://bbc.co.uk").await.unwrap();
        assert_eq!(by_long.short(), "ABC1");

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_retrieve_missing() {
        let repo = InMemoryRepository::new();

        assert!(matches!(
            repo.retrieve_by_short_code("DEF2").await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(
            repo.retrieve_by_long_url("http://example.com").await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_duplicate_long_url() {
        let repo =
            InMemoryRepository::with_entries([ShortenedUrl::new("http://bbc.co.uk", "ABC1")]);

        let result = repo
            .create(ShortenedUrl::new("http://bbc.co.uk", "XYZ9"))
            .await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_empty() {
        let repo = InMemoryRepository::new();

        let result = repo.create(ShortenedUrl::new("", "ABC1")).await;

        assert!(matches!(result, Err(RepositoryError::Empty)));
        assert!(repo.snapshot().await.is_empty());
    }
}
