//! Catalog-specific error types
//!
//! Loading the catalog can fail in exactly two user-visible ways:
//!
//! - **`ManifestLoad`**: the course manifest could not be fetched or parsed.
//!   This is fatal to the catalog view.
//! - **`CourseDataLoad`**: a single course's flashcard file could not be
//!   fetched or parsed. This degrades that one course and never affects
//!   its siblings.
//!
//! Both wrap a [`LoadError`] describing the underlying fetch or parse failure.

use crate::catalog::source::SourceError;
use thiserror::Error;

/// Failure to fetch or decode a single JSON resource
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data source could not deliver the resource
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The resource was delivered but is not the expected JSON shape
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The manifest could not be loaded
    #[error("Error loading courses. Please check that {path} exists ({source})")]
    ManifestLoad {
        path: String,
        #[source]
        source: LoadError,
    },

    /// A course's flashcard file could not be loaded
    #[error("Error loading flashcards. Please check that {path} exists ({source})")]
    CourseDataLoad {
        path: String,
        #[source]
        source: LoadError,
    },
}

impl CatalogError {
    /// Path of the resource that failed to load
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::ManifestLoad { path, .. } | Self::CourseDataLoad { path, .. } => path,
        }
    }

    /// Whether this error is fatal to the whole catalog
    #[must_use]
    pub const fn is_manifest_error(&self) -> bool {
        matches!(self, Self::ManifestLoad { .. })
    }
}
