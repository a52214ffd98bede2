//! Course catalog
//!
//! Loads the course manifest and per-course card counts through a
//! [`DataSource`], and derives the category/technology views used by the
//! navigation levels.
//!
//! # Architecture
//!
//! - `models`: wire types (`Course`, `Flashcard`, `Manifest`)
//! - `source`: load-by-path abstraction (`DirectorySource`, `MemorySource`)
//! - `loader`: manifest parsing and the concurrent card-count fan-out
//! - `views`: filtered course lists and distinct label sets
//!
//! A [`Catalog`] only exists after every card count has settled, so counts
//! can never be read half-annotated.

pub mod error;
pub mod loader;
pub mod models;
pub mod source;
pub mod views;

pub use error::{CatalogError, LoadError};
pub use loader::{CountFailure, annotate_card_counts, load_flashcards, load_manifest};
pub use models::{Course, DEFAULT_SECTION, Flashcard, Manifest};
pub use source::{DataSource, DirectorySource, MemorySource, SourceError};
pub use views::{CourseFilter, distinct_categories, distinct_technologies, filter_courses};

/// A fully annotated course list
#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Course>,
    failures: Vec<CountFailure>,
}

impl Catalog {
    /// Load the manifest at `manifest_path` and count every course's cards
    ///
    /// Per-course failures do not fail the load; they are available through
    /// [`Catalog::failures`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ManifestLoad` if the manifest itself cannot be
    /// loaded.
    pub fn load<S>(source: &S, manifest_path: &str) -> Result<Self, CatalogError>
    where
        S: DataSource + ?Sized,
    {
        let mut courses = load_manifest(source, manifest_path)?;
        let failures = annotate_card_counts(source, &mut courses);
        Ok(Self { courses, failures })
    }

    /// All courses, in manifest order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses whose flashcard file could not be counted
    #[must_use]
    pub fn failures(&self) -> &[CountFailure] {
        &self.failures
    }

    /// Look up a course by identifier
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Distinct categories, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.courses)
    }

    /// Distinct technologies within `category` (or across all courses), sorted
    #[must_use]
    pub fn technologies(&self, category: Option<&str>) -> Vec<String> {
        distinct_technologies(&self.courses, category)
    }

    /// Courses matching `filter`, in manifest order
    #[must_use]
    pub fn filtered(&self, filter: &CourseFilter<'_>) -> Vec<&Course> {
        filter_courses(&self.courses, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cards_json, manifest_json};

    #[test]
    fn test_catalog_load_keeps_failed_courses() {
        let source = MemorySource::new()
            .with_file(
                "courses.json",
                manifest_json(&[("A", "a.json", None, None), ("B", "b.json", None, None)]),
            )
            .with_file("a.json", cards_json(3));

        let catalog = Catalog::load(&source, "courses.json").unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.course("A").unwrap().is_selectable());
        assert_eq!(catalog.course("B").unwrap().card_count_label(), "0 cards");
        assert_eq!(catalog.failures().len(), 1);
        assert_eq!(catalog.failures()[0].course_id, "B");
    }

    #[test]
    fn test_catalog_load_fails_without_manifest() {
        let source = MemorySource::new().with_file("a.json", cards_json(1));
        let err = Catalog::load(&source, "courses.json").unwrap_err();
        assert!(err.is_manifest_error());
    }

    #[test]
    fn test_empty_manifest_is_empty_catalog() {
        let source = MemorySource::new().with_file("courses.json", r#"{"Courses": []}"#);
        let catalog = Catalog::load(&source, "courses.json").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
