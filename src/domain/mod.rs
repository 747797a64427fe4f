//! Domain layer containing the shortened URL entity, the manifest and the
//! storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::ShortenedUrl`] and the in-memory [`entities::Manifest`]
//! - [`repositories`] - The [`repositories::ShortenedUrlRepository`] trait and its error type
//!
//! The domain layer has no dependencies on HTTP or on a particular storage
//! backend. Implementations live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
