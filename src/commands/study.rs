//! Study command - run the interactive study session

use crate::{
    FlashdeckError,
    catalog::DataSource,
    study::{NavOutcome, StudySession},
    ui::{StudyApp, UiError},
};
use log::info;

type Result<T> = std::result::Result<T, FlashdeckError>;

/// Apply the command-line start options to a fresh session
///
/// With `course`, navigation jumps straight to that course's flashcards and
/// `randomize` shuffles them. Without it the session stays at the top level.
///
/// # Errors
///
/// Returns `UiError::CourseUnavailable` if the course cannot be opened,
/// including when the manifest failed to load.
pub fn prepare<S: DataSource>(
    session: &mut StudySession<S>,
    course: Option<&str>,
    randomize: bool,
) -> Result<()> {
    let Some(course_id) = course else {
        return Ok(());
    };

    if let Some(e) = session.catalog_error() {
        return Err(UiError::CourseUnavailable(course_id.to_string(), e.to_string()).into());
    }

    if let NavOutcome::Ignored(reason) = session.open_course(course_id) {
        return Err(UiError::CourseUnavailable(course_id.to_string(), reason.to_string()).into());
    }
    info!("Opened course {course_id}");

    if randomize {
        session.set_randomize(true);
    }
    Ok(())
}

/// Execute the study command
///
/// # Errors
///
/// Returns `FlashdeckError` if the start course cannot be opened or the
/// terminal UI fails.
pub fn execute<S: DataSource>(
    mut session: StudySession<S>,
    course: Option<&str>,
    randomize: bool,
) -> Result<()> {
    prepare(&mut session, course, randomize)?;
    StudyApp::new().run(&mut session)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemorySource;
    use crate::study::{CardSequence, Layout, Level};
    use crate::testing::grouped_source;

    fn session(layout: Layout) -> StudySession<MemorySource> {
        StudySession::open(grouped_source(), "courses.json", layout)
            .with_sequence(CardSequence::seeded(11))
    }

    #[test]
    fn test_prepare_without_course_stays_at_top() {
        let mut session = session(Layout::Grouped);
        prepare(&mut session, None, false).unwrap();
        assert_eq!(session.active_level(), Level::Category);
    }

    #[test]
    fn test_prepare_opens_course_randomized() {
        let mut session = session(Layout::Flat);
        prepare(&mut session, Some("SC-900"), true).unwrap();

        assert_eq!(session.active_level(), Level::Flashcards);
        assert!(session.controls().randomize);
        assert_eq!(session.sequence().len(), 2);
    }

    #[test]
    fn test_prepare_unknown_course_fails() {
        let mut session = session(Layout::Flat);
        let err = prepare(&mut session, Some("NOPE"), false).unwrap_err();

        assert!(matches!(
            err,
            FlashdeckError::Ui(UiError::CourseUnavailable(ref id, _)) if id == "NOPE"
        ));
        assert_eq!(session.active_level(), Level::Course);
    }

    #[test]
    fn test_prepare_with_missing_manifest_fails() {
        let mut session = StudySession::open(MemorySource::new(), "courses.json", Layout::Flat);
        let err = prepare(&mut session, Some("SC-900"), false).unwrap_err();
        assert!(err.to_string().contains("Error loading courses."));
    }
}
