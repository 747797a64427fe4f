//! The long URL → short code mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ShortenedUrl;
use crate::domain::repositories::RepositoryError;

/// Flat mapping of long URLs to short codes.
///
/// Serializes as a plain JSON object, e.g. `{"http://bbc.co.uk":"ABC1"}`.
/// Keys are kept sorted so the persisted form is stable between writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the short code for a long URL.
    pub fn get_by_long(&self, long: &str) -> Option<ShortenedUrl> {
        self.entries
            .get(long)
            .filter(|short| !short.is_empty())
            .map(|short| ShortenedUrl::new(long, short.as_str()))
    }

    /// Finds the entry whose short code is `short`.
    ///
    /// The mapping is keyed by long URL, so this is a linear scan.
    pub fn find_by_short(&self, short: &str) -> Option<ShortenedUrl> {
        if short.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(_, s)| s.as_str() == short)
            .map(|(long, s)| ShortenedUrl::new(long.as_str(), s.as_str()))
    }

    /// Adds a new pair.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::Empty`] if either half of the pair is empty
    /// - [`RepositoryError::AlreadyExists`] if the long URL is already mapped
    /// - [`RepositoryError::CodeTaken`] if another long URL already uses the code
    pub fn insert(&mut self, url: &ShortenedUrl) -> Result<(), RepositoryError> {
        if url.is_empty() {
            return Err(RepositoryError::Empty);
        }

        if self.get_by_long(url.long()).is_some() {
            return Err(RepositoryError::AlreadyExists);
        }

        if self.find_by_short(url.short()).is_some() {
            return Err(RepositoryError::CodeTaken);
        }

        self.entries
            .insert(url.long().to_string(), url.short().to_string());

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ShortenedUrl> for Manifest {
    fn from_iter<I: IntoIterator<Item = ShortenedUrl>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|url| (url.long().to_string(), url.short().to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbc() -> ShortenedUrl {
        ShortenedUrl::new("http://bbc.co.uk", "ABC1")
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut manifest = Manifest::new();
        manifest.insert(&bbc()).unwrap();

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.get_by_long("http://bbc.co.uk"), Some(bbc()));
        assert_eq!(manifest.find_by_short("ABC1"), Some(bbc()));
    }

    #[test]
    fn test_lookup_miss() {
        let manifest: Manifest = [bbc()].into_iter().collect();

        assert!(manifest.get_by_long("http://example.com").is_none());
        assert!(manifest.find_by_short("DEF2").is_none());
        assert!(manifest.find_by_short("").is_none());
    }

    #[test]
    fn test_insert_empty_rejected() {
        let mut manifest = Manifest::new();

        let result = manifest.insert(&ShortenedUrl::new("", "ABC1"));
        assert!(matches!(result, Err(RepositoryError::Empty)));

        let result = manifest.insert(&ShortenedUrl::new("http://bbc.co.uk", ""));
        assert!(matches!(result, Err(RepositoryError::Empty)));

        assert!(manifest.is_empty());
    }

    #[test]
    fn test_insert_existing_long_url_rejected() {
        let mut manifest: Manifest = [bbc()].into_iter().collect();

        let result = manifest.insert(&ShortenedUrl::new("http://bbc.co.uk", "XYZ9"));
        assert!(matches!(result, Err(RepositoryError::AlreadyExists)));
        assert_eq!(manifest.find_by_short("ABC1"), Some(bbc()));
    }

    #[test]
    fn test_insert_taken_code_rejected() {
        let mut manifest: Manifest = [bbc()].into_iter().collect();

        let result = manifest.insert(&ShortenedUrl::new("http://example.com", "ABC1"));
        assert!(matches!(result, Err(RepositoryError::CodeTaken)));
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let manifest: Manifest = [
            ShortenedUrl::new("http://example.com", "ZZZ9"),
            bbc(),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(
            json,
            r#"{"http://bbc.co.uk":"ABC1","http://example.com":"ZZZ9"}"#
        );
    }

    #[test]
    fn test_deserializes_flat_object() {
        let manifest: Manifest = serde_json::from_str(r#"{"http://bbc.co.uk":"ABC1"}"#).unwrap();
        assert_eq!(manifest.find_by_short("ABC1"), Some(bbc()));
    }

    #[test]
    fn test_rejects_non_string_values() {
        let result = serde_json::from_str::<Manifest>(r#"{"http://bbc.co.uk":1}"#);
        assert!(result.is_err());
    }
}
