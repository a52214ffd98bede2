//! Data sources for catalog resources
//!
//! The catalog never touches the filesystem directly. Every manifest and
//! flashcard file is fetched through a [`DataSource`], an opaque
//! load-by-path operation. Paths are always relative to the source's root,
//! exactly as they appear in the manifest's `Source` field.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned by a data source
#[derive(Debug, Error)]
pub enum SourceError {
    /// No resource exists at the path
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Load-by-path access to catalog resources
///
/// Implementations must be shareable across threads: card counts are
/// fetched concurrently.
pub trait DataSource: Send + Sync {
    /// Fetch the raw bytes stored at `path`
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the resource is missing or unreadable.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError>;

    /// Human-readable location of `path`, used in error messages
    fn describe(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Data source backed by a directory on disk (e.g. `Data/`)
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all paths are resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DataSource for DirectorySource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        let full = self.root.join(path);
        fs::read(&full).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound(full.display().to_string())
            } else {
                SourceError::Io {
                    path: full.display().to_string(),
                    source: e,
                }
            }
        })
    }

    fn describe(&self, path: &str) -> String {
        self.root.join(path).display().to_string()
    }
}

/// In-memory data source
///
/// Useful for embedding a catalog in another program and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous content at `path`
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add a resource in place
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }

    /// Remove a resource; later fetches of `path` fail with `NotFound`
    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }
}

impl DataSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, SourceError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }
}
