//! Core domain entities.
//!
//! - [`ShortenedUrl`] - An immutable long URL / short code pair
//! - [`Manifest`] - The long URL → short code mapping every backend stores

pub mod manifest;
pub mod shortened_url;

pub use manifest::Manifest;
pub use shortened_url::ShortenedUrl;
