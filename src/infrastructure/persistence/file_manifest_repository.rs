//! JSON file implementation of the shortened URL repository.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::{Manifest, ShortenedUrl};
use crate::domain::repositories::{RepositoryError, ShortenedUrlRepository};

/// Repository that keeps the whole manifest in one JSON file.
///
/// Every operation reads the full file. `create` loads, inserts and rewrites
/// the file; the new contents go to a sibling temp file that is then renamed
/// over the manifest, so readers never observe a half-written file.
///
/// Writes from this process are serialized. Other processes pointed at the
/// same file are not coordinated with.
pub struct FileManifestRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileManifestRepository {
    /// File name of the manifest inside the data directory.
    pub const FILE_NAME: &'static str = "db.txt";

    /// Creates a repository whose manifest lives at `<data_dir>/db.txt`.
    ///
    /// The directory and file are created on the first successful `create`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_path(data_dir.as_ref().join(Self::FILE_NAME))
    }

    /// Creates a repository for an explicit manifest path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the manifest.
    ///
    /// A missing or blank file is an empty manifest. Anything that fails to
    /// parse is reported as [`RepositoryError::Corrupt`] and left untouched.
    async fn load(&self) -> Result<Manifest, RepositoryError> {
        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "manifest not found, starting empty");
                return Ok(Manifest::new());
            }
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Manifest::new());
        }

        serde_json::from_slice(&contents).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "manifest is corrupt");
            RepositoryError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Serializes the whole manifest and replaces the file with it.
    async fn save(&self, manifest: &Manifest) -> Result<(), RepositoryError> {
        let persist_error = |source: io::Error| RepositoryError::Persist {
            path: self.path.clone(),
            source,
        };

        let contents =
            serde_json::to_vec(manifest).map_err(|e| persist_error(io::Error::other(e)))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(persist_error)?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &contents).await.map_err(persist_error)?;

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(persist_error(e));
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ShortenedUrlRepository for FileManifestRepository {
    async fn create(&self, url: ShortenedUrl) -> Result<ShortenedUrl, RepositoryError> {
        if url.is_empty() {
            return Err(RepositoryError::Empty);
        }

        let _guard = self.write_lock.lock().await;

        let mut manifest = self.load().await?;
        manifest.insert(&url)?;
        self.save(&manifest).await?;

        Ok(url)
    }

    async fn retrieve_by_short_code(&self, code: &str) -> Result<ShortenedUrl, RepositoryError> {
        self.load()
            .await?
            .find_by_short(code)
            .ok_or(RepositoryError::NotFound)
    }

    async fn retrieve_by_long_url(
        &self,
        long_url: &str,
    ) -> Result<ShortenedUrl, RepositoryError> {
        self.load()
            .await?
            .get_by_long(long_url)
            .ok_or(RepositoryError::NotFound)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.load().await?.len())
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appends_file_name() {
        let repo = FileManifestRepository::new("data");
        assert_eq!(repo.path(), Path::new("data/db.txt"));
    }

    #[test]
    fn test_tmp_path_is_sibling() {
        let repo = FileManifestRepository::new("data");
        assert_eq!(repo.tmp_path(), PathBuf::from("data/db.txt.tmp"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(FileManifestRepository::new("data").kind(), "file");
    }
}
