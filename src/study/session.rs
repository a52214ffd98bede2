//! Study session management
//!
//! A [`StudySession`] is the single controller a presentation adapter talks
//! to. It owns the catalog, the navigation state and the card sequence, and
//! exposes everything the adapter renders as plain view data.
//!
//! # Workflow
//!
//! ```text
//! Session opened
//!     ↓
//! Manifest loaded?
//!     ├─ No  → catalog error shown in place of the selection list
//!     └─ Yes → top level of the layout
//!         ↓
//! ┌─→ select(key) at Category / Technology / Course
//! │       ↓
//! │   Course chosen → flashcards fetched → Flashcards level
//! │       ├─ load ok     → card sequence filled
//! │       └─ load failed → sequence empty, inline error
//! │       ↓
//! └── go_back / back_to → sequence reset, randomize off
//! ```

use crate::catalog::{
    Catalog, CatalogError, Course, CourseFilter, DataSource, Flashcard, load_flashcards,
};
use crate::study::navigation::{IgnoreReason, Layout, Level, NavOutcome, NavigationState};
use crate::study::sequence::CardSequence;
use log::{debug, info, warn};

/// Question text shown when a course's flashcards fail to load
pub const LOAD_ERROR_QUESTION: &str = "Error loading flashcards";

/// One row of a selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Value passed back to [`StudySession::select`]
    pub key: String,
    /// Main display text
    pub label: String,
    /// Secondary line (course description)
    pub detail: Option<String>,
    /// Certifier line
    pub certifier: Option<String>,
    /// Right-hand annotation (card or course count)
    pub badge: String,
    /// Whether selecting the entry can do anything
    pub enabled: bool,
}

/// What the selection area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionView {
    /// The manifest failed to load
    Error(String),
    /// Entries for the active level
    Entries(Vec<ListEntry>),
}

/// What the card surface should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView<'a> {
    /// A card is loaded
    Card {
        card: &'a Flashcard,
        section: &'a str,
        flipped: bool,
        /// Zero-based position in the active order
        position: usize,
        total: usize,
    },
    /// The flashcard file could not be loaded
    LoadError { question: String, answer: String },
    /// Nothing to show
    Empty,
}

/// Enabled/disabled state of the card controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub randomize: bool,
}

/// Study session - owns navigation and sequencing for one catalog
pub struct StudySession<S: DataSource> {
    source: S,
    catalog: Result<Catalog, CatalogError>,
    nav: NavigationState,
    cards: CardSequence,
    load_error: Option<CatalogError>,
}

impl<S: DataSource> StudySession<S> {
    /// Load the catalog from `source` and start at the top of `layout`
    ///
    /// A manifest failure does not fail the session; it is surfaced through
    /// [`selection_view`](Self::selection_view).
    pub fn open(source: S, manifest_path: &str, layout: Layout) -> Self {
        let catalog = Catalog::load(&source, manifest_path);
        match &catalog {
            Ok(c) => info!("Loaded catalog with {} course(s)", c.len()),
            Err(e) => warn!("{e}"),
        }
        Self::from_parts(source, catalog, layout)
    }

    /// Start a session over an already loaded catalog
    pub fn with_catalog(source: S, catalog: Catalog, layout: Layout) -> Self {
        Self::from_parts(source, Ok(catalog), layout)
    }

    fn from_parts(source: S, catalog: Result<Catalog, CatalogError>, layout: Layout) -> Self {
        Self {
            source,
            catalog,
            nav: NavigationState::new(layout),
            cards: CardSequence::new(),
            load_error: None,
        }
    }

    /// Use `cards` as the sequencer, e.g. a seeded one
    #[must_use]
    pub fn with_sequence(mut self, cards: CardSequence) -> Self {
        self.cards = cards;
        self
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    #[must_use]
    pub const fn sequence(&self) -> &CardSequence {
        &self.cards
    }

    #[must_use]
    pub const fn active_level(&self) -> Level {
        self.nav.active_level()
    }

    /// The loaded catalog, if the manifest loaded
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref().ok()
    }

    /// The manifest error, if the manifest failed to load
    #[must_use]
    pub fn catalog_error(&self) -> Option<&CatalogError> {
        self.catalog.as_ref().err()
    }

    /// The flashcard load error of the selected course, if any
    #[must_use]
    pub const fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }

    /// Categories offered at the category level
    ///
    /// A category is only offered if at least one of its courses also has a
    /// technology, since the grouped descent cannot reach any other course.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<String> {
        let Some(catalog) = self.catalog() else {
            return Vec::new();
        };
        catalog
            .categories()
            .into_iter()
            .filter(|category| !catalog.technologies(Some(category.as_str())).is_empty())
            .collect()
    }

    /// Technologies offered for the bound category
    #[must_use]
    pub fn visible_technologies(&self) -> Vec<String> {
        match (self.catalog(), self.nav.selected_category()) {
            (Some(catalog), Some(category)) => catalog.technologies(Some(category)),
            _ => Vec::new(),
        }
    }

    /// Courses offered at the course level, honoring bound selections
    #[must_use]
    pub fn visible_courses(&self) -> Vec<&Course> {
        let filter = CourseFilter::new(
            self.nav.selected_category(),
            self.nav.selected_technology(),
        );
        self.catalog()
            .map(|catalog| catalog.filtered(&filter))
            .unwrap_or_default()
    }

    /// Entries for the active level, or the manifest error
    #[must_use]
    pub fn selection_view(&self) -> SelectionView {
        let catalog = match &self.catalog {
            Ok(catalog) => catalog,
            Err(e) => return SelectionView::Error(e.to_string()),
        };

        let entries = match self.nav.active_level() {
            Level::Category => self
                .visible_categories()
                .into_iter()
                .map(|category| {
                    let count = catalog
                        .filtered(&CourseFilter::new(Some(category.as_str()), None))
                        .iter()
                        .filter(|course| course.technology.is_some())
                        .count();
                    group_entry(category, count)
                })
                .collect(),
            Level::Technology => self
                .visible_technologies()
                .into_iter()
                .map(|technology| {
                    let filter =
                        CourseFilter::new(self.nav.selected_category(), Some(technology.as_str()));
                    let count = catalog.filtered(&filter).len();
                    group_entry(technology, count)
                })
                .collect(),
            Level::Course => self.visible_courses().into_iter().map(course_entry).collect(),
            Level::Flashcards => Vec::new(),
        };

        SelectionView::Entries(entries)
    }

    /// Select the entry with `key` at the active level
    pub fn select(&mut self, key: &str) -> NavOutcome {
        match self.nav.active_level() {
            Level::Category => self.select_category(key),
            Level::Technology => self.select_technology(key),
            Level::Course => self.select_course(key),
            Level::Flashcards => NavOutcome::Ignored(IgnoreReason::WrongLevel),
        }
    }

    pub fn select_category(&mut self, category: &str) -> NavOutcome {
        let known = self.visible_categories();
        self.nav.select_category(category, &known)
    }

    pub fn select_technology(&mut self, technology: &str) -> NavOutcome {
        let known = self.visible_technologies();
        self.nav.select_technology(technology, &known)
    }

    /// Select a course and load its flashcards
    ///
    /// Courses outside the current filters or without cards are ignored. A
    /// failed load still enters the flashcard level, with an empty sequence
    /// and [`load_error`](Self::load_error) set. Re-selecting the course
    /// later fetches again.
    pub fn select_course(&mut self, course_id: &str) -> NavOutcome {
        let Some(course) = self
            .visible_courses()
            .into_iter()
            .find(|c| c.id == course_id)
            .cloned()
        else {
            return NavOutcome::Ignored(IgnoreReason::UnknownCourse);
        };

        let outcome = self.nav.select_course(&course);
        if !outcome.is_transition() {
            debug!("Ignored selection of course {course_id}: {outcome:?}");
            return outcome;
        }

        match load_flashcards(&self.source, &course) {
            Ok(cards) => {
                info!("Loaded {} card(s) for course {}", cards.len(), course.id);
                self.load_error = None;
                self.cards.load(cards);
            }
            Err(e) => {
                warn!("{e}");
                self.cards.load(Vec::new());
                self.load_error = Some(e);
            }
        }
        outcome
    }

    /// Jump straight into a course from any level
    ///
    /// Navigation restarts at the top and binds the course's category and
    /// technology first when the layout has those levels. Courses that the
    /// layout cannot reach (missing tags) are ignored.
    pub fn open_course(&mut self, course_id: &str) -> NavOutcome {
        let Some(course) = self.catalog().and_then(|c| c.course(course_id)).cloned() else {
            return NavOutcome::Ignored(IgnoreReason::UnknownCourse);
        };
        if !course.is_selectable() {
            return NavOutcome::Ignored(IgnoreReason::NotSelectable);
        }

        let grouping = match (self.nav.layout(), &course.category, &course.technology) {
            (Layout::Flat, _, _) => None,
            (Layout::Grouped, Some(category), Some(technology)) => Some((category, technology)),
            (Layout::Grouped, _, _) => return NavOutcome::Ignored(IgnoreReason::UnknownCourse),
        };

        let from = self.nav.active_level();
        self.reset();
        if let Some((category, technology)) = grouping {
            self.select_category(category);
            self.select_technology(technology);
        }

        match self.select_course(&course.id) {
            NavOutcome::Transitioned { to, .. } => NavOutcome::Transitioned { from, to },
            ignored => ignored,
        }
    }

    /// Move one level up
    pub fn go_back(&mut self) -> NavOutcome {
        let outcome = self.nav.go_back();
        self.after_back(outcome)
    }

    /// Jump back to `level`; same effect as repeated [`go_back`](Self::go_back)
    pub fn back_to(&mut self, level: Level) -> NavOutcome {
        let outcome = self.nav.back_to(level);
        self.after_back(outcome)
    }

    /// Return to the top level
    pub fn reset(&mut self) -> NavOutcome {
        let outcome = self.nav.reset();
        self.after_back(outcome)
    }

    fn after_back(&mut self, outcome: NavOutcome) -> NavOutcome {
        if outcome.left_flashcards() {
            self.cards.reset();
            self.load_error = None;
        }
        outcome
    }

    pub fn next(&mut self) -> bool {
        self.cards.next()
    }

    pub fn previous(&mut self) -> bool {
        self.cards.previous()
    }

    pub fn flip(&mut self) -> bool {
        self.cards.flip()
    }

    /// Toggle randomized order without refetching
    pub fn set_randomize(&mut self, on: bool) {
        self.cards.set_randomize(on);
    }

    pub fn toggle_randomize(&mut self) -> bool {
        let on = !self.cards.is_randomized();
        self.set_randomize(on);
        on
    }

    /// Title of the selected course
    #[must_use]
    pub fn course_title(&self) -> Option<&str> {
        self.nav.selected_course().map(|c| c.title.as_str())
    }

    /// What the card surface shows
    #[must_use]
    pub fn card_view(&self) -> CardView<'_> {
        if let Some(e) = &self.load_error {
            return CardView::LoadError {
                question: LOAD_ERROR_QUESTION.to_string(),
                answer: format!("Please check that {} exists", e.path()),
            };
        }

        match (self.cards.current_card(), self.cards.index()) {
            (Some(card), Some(position)) => CardView::Card {
                card,
                section: card.section_label(),
                flipped: self.cards.is_flipped(),
                position,
                total: self.cards.len(),
            },
            _ => CardView::Empty,
        }
    }

    #[must_use]
    pub fn controls(&self) -> ControlState {
        ControlState {
            previous_disabled: self.cards.previous_disabled(),
            next_disabled: self.cards.next_disabled(),
            randomize: self.cards.is_randomized(),
        }
    }
}

fn group_entry(label: String, course_count: usize) -> ListEntry {
    ListEntry {
        key: label.clone(),
        label,
        detail: None,
        certifier: None,
        badge: format!("{course_count} course(s)"),
        enabled: true,
    }
}

fn course_entry(course: &Course) -> ListEntry {
    ListEntry {
        key: course.id.clone(),
        label: course.display_label(),
        detail: Some(course.description.clone()).filter(|d| !d.is_empty()),
        certifier: Some(course.certifier_label()),
        badge: course.card_count_label(),
        enabled: course.is_selectable(),
    }
}
