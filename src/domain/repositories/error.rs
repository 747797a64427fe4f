//! Storage error type shared by every repository backend.

use std::io;
use std::path::PathBuf;

/// Errors produced by [`super::ShortenedUrlRepository`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Shortened URL is empty")]
    Empty,

    #[error("Shortened URL already exists")]
    AlreadyExists,

    #[error("Short code is already in use")]
    CodeTaken,

    #[error("Shortened URL does not exist")]
    NotFound,

    #[error("manifest {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write manifest {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
