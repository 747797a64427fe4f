//! Repository trait definitions for the domain layer.
//!
//! [`ShortenedUrlRepository`] abstracts where the manifest lives. Handlers
//! never touch storage directly; they go through
//! [`crate::application::services::LinkService`], which holds the repository
//! as an injected `Arc<dyn ShortenedUrlRepository>`.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::FileManifestRepository`] - JSON file on disk
//! - [`crate::infrastructure::persistence::InMemoryRepository`] - process-local map
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod error;
pub mod shortened_url_repository;

pub use error::RepositoryError;
pub use shortened_url_repository::ShortenedUrlRepository;

#[cfg(test)]
pub use shortened_url_repository::MockShortenedUrlRepository;
