//! Repository implementations.
//!
//! # Repositories
//!
//! - [`FileManifestRepository`] - Manifest persisted as a single JSON file
//! - [`InMemoryRepository`] - Manifest held in process memory (tests, ephemeral runs)

pub mod file_manifest_repository;
pub mod memory_repository;

pub use file_manifest_repository::FileManifestRepository;
pub use memory_repository::InMemoryRepository;
