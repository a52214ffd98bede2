//! Catalog loading
//!
//! Fetches the manifest, then fans out one flashcard-file load per course to
//! derive card counts. The fan-out runs on rayon's pool; the call joins on
//! every per-course attempt before returning, whether it succeeded or not.

use crate::catalog::error::{CatalogError, LoadError};
use crate::catalog::models::{Course, Flashcard, Manifest};
use crate::catalog::source::DataSource;
use log::{debug, warn};
use rayon::prelude::*;
use serde::de::{DeserializeOwned, IgnoredAny};

/// A course whose card count could not be determined
#[derive(Debug)]
pub struct CountFailure {
    /// Identifier of the affected course
    pub course_id: String,
    /// Why its flashcard file failed to load
    pub error: CatalogError,
}

/// Fetch `path` from `source` and decode it as JSON
fn fetch_json<T, S>(source: &S, path: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let bytes = source.fetch(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Load and parse the course manifest
///
/// # Errors
///
/// Returns `CatalogError::ManifestLoad` if the manifest is missing or is not
/// a JSON document with a `Courses` list.
pub fn load_manifest<S>(source: &S, manifest_path: &str) -> Result<Vec<Course>, CatalogError>
where
    S: DataSource + ?Sized,
{
    let manifest: Manifest =
        fetch_json(source, manifest_path).map_err(|e| CatalogError::ManifestLoad {
            path: source.describe(manifest_path),
            source: e,
        })?;

    debug!(
        "Loaded manifest {manifest_path} with {} course(s)",
        manifest.courses.len()
    );
    Ok(manifest.courses)
}

/// Load the full flashcard list of a course
///
/// # Errors
///
/// Returns `CatalogError::CourseDataLoad` if the course's flashcard file is
/// missing or malformed.
pub fn load_flashcards<S>(source: &S, course: &Course) -> Result<Vec<Flashcard>, CatalogError>
where
    S: DataSource + ?Sized,
{
    fetch_json(source, &course.source).map_err(|e| CatalogError::CourseDataLoad {
        path: source.describe(&course.source),
        source: e,
    })
}

/// Count the cards in a course's flashcard file without materializing them
fn count_flashcards<S>(source: &S, course: &Course) -> Result<usize, CatalogError>
where
    S: DataSource + ?Sized,
{
    fetch_json::<Vec<IgnoredAny>, _>(source, &course.source)
        .map(|cards| cards.len())
        .map_err(|e| CatalogError::CourseDataLoad {
            path: source.describe(&course.source),
            source: e,
        })
}

/// Record the card count of every course
///
/// Each course is counted independently; a course whose file fails to load
/// gets a count of 0 and is reported in the returned list. No course is ever
/// dropped, and the returned failures are in input order.
pub fn annotate_card_counts<S>(source: &S, courses: &mut [Course]) -> Vec<CountFailure>
where
    S: DataSource + ?Sized,
{
    let failures: Vec<CountFailure> = courses
        .par_iter_mut()
        .filter_map(|course| match count_flashcards(source, course) {
            Ok(count) => {
                course.set_card_count(count);
                None
            }
            Err(error) => {
                warn!("Error loading flashcards for course {}: {error}", course.id);
                course.set_card_count(0);
                Some(CountFailure {
                    course_id: course.id.clone(),
                    error,
                })
            }
        })
        .collect();

    debug!(
        "Annotated card counts for {} course(s), {} failure(s)",
        courses.len(),
        failures.len()
    );
    failures
}
