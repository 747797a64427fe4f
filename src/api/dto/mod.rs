//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Every response body is wrapped
//! in an [`envelope::Envelope`].

pub mod envelope;
pub mod health;
pub mod shorten;
