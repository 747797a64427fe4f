//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::{RepositoryError, ShortenedUrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_long_url;

/// Default number of codes tried before giving up on a shorten request.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving short codes.
///
/// Owns the collision protocol: generate a random code, check it against
/// storage, retry on collision up to a fixed number of attempts.
pub struct LinkService {
    repository: Arc<dyn ShortenedUrlRepository>,
    max_code_attempts: usize,
}

impl LinkService {
    /// Creates a new link service over the given storage.
    pub fn new(repository: Arc<dyn ShortenedUrlRepository>) -> Self {
        Self {
            repository,
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
        }
    }

    /// Overrides how many codes are tried before [`Self::shorten`] fails.
    pub fn with_max_code_attempts(mut self, attempts: usize) -> Self {
        self.max_code_attempts = attempts.max(1);
        self
    }

    /// Returns the short code for `long_url`, creating one if needed.
    ///
    /// # Deduplication
    ///
    /// A URL that is already in the manifest gets its existing code back.
    /// URLs are compared exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with "`url` is not a valid URL" if the
    /// URL is not a well-formed absolute URI.
    ///
    /// Returns [`AppError::Internal`] if no free code was found within the
    /// attempt limit, or if the manifest could not be read or saved.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        validate_long_url(long_url).map_err(|e| {
            debug!(url = long_url, error = %e, "rejected long URL");
            AppError::bad_request("`url` is not a valid URL")
        })?;

        match self.repository.retrieve_by_long_url(long_url).await {
            Ok(existing) => return Ok(existing),
            Err(RepositoryError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        for attempt in 1..=self.max_code_attempts {
            let code = generate_code();

            match self.repository.retrieve_by_short_code(&code).await {
                Ok(_) => {
                    debug!(attempt, code = %code, "short code collision");
                    continue;
                }
                Err(RepositoryError::NotFound) => {}
                Err(e) => return Err(e.into()),
            }

            match self
                .repository
                .create(ShortenedUrl::new(long_url, code))
                .await
            {
                Ok(created) => {
                    info!(code = created.short(), url = created.long(), "short link created");
                    return Ok(created);
                }
                Err(RepositoryError::CodeTaken) => {
                    debug!(attempt, "short code taken between lookup and create");
                }
                Err(RepositoryError::AlreadyExists) => {
                    return self
                        .repository
                        .retrieve_by_long_url(long_url)
                        .await
                        .map_err(AppError::from);
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(
            attempts = self.max_code_attempts,
            "gave up looking for a free short code"
        );

        Err(AppError::internal("Failed to generate unique short code"))
    }

    /// Looks up the pair for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] if the manifest could not be read.
    pub async fn resolve(&self, code: &str) -> Result<ShortenedUrl, AppError> {
        Ok(self.repository.retrieve_by_short_code(code).await?)
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Name of the storage backend in use.
    pub fn storage_kind(&self) -> &'static str {
        self.repository.kind()
    }

    /// Builds the public short URL for a code served from `host`.
    pub fn short_url(&self, host: &str, code: &str) -> String {
        format!("http://{}/{}", host.trim_end_matches('/'), code)
    }
}
