//! # HTTP URL Shortener
//!
//! A small URL shortening service built with Axum. Long URLs are mapped to
//! four-character codes drawn from `A-Z0-9`, and the mapping is persisted as
//! a JSON manifest (`data/db.txt` by default).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Shortened URL entity, manifest, and repository trait
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - File and in-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Client** ([`client`]) - HTTP client used by the `shortener-cli` binary
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on 0.0.0.0:8080
//! cargo run
//!
//! # Shorten a URL
//! cargo run --bin shortener-cli -- shorten https://example.com/some/long/path
//!
//! # Open a short link in the browser
//! cargo run --bin shortener-cli -- redirect ABC1
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Manifest, ShortenedUrl};
    pub use crate::domain::repositories::{RepositoryError, ShortenedUrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{FileManifestRepository, InMemoryRepository};
    pub use crate::state::AppState;
}
