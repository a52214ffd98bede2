//! Navigation state machine
//!
//! Tracks the active selection level and the value chosen at each level
//! above it. The level sequence is driven by the [`Layout`]:
//!
//! ```text
//! Grouped:  Category → Technology → Course → Flashcards
//! Flat:                             Course → Flashcards
//! ```
//!
//! Selections are always a prefix of the sequence: a level's selection is
//! bound exactly when that level lies above the active one. Moving back up
//! clears the selection of every level at or below the new active level.

use crate::catalog::Course;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the navigation hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Category,
    Technology,
    Course,
    Flashcards,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Category => "Categories",
            Self::Technology => "Technologies",
            Self::Course => "Courses",
            Self::Flashcards => "Flashcards",
        };
        f.write_str(name)
    }
}

/// Which levels precede the flashcard view
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Course list straight to flashcards
    #[default]
    Flat,
    /// Category, then technology, then course
    Grouped,
}

const GROUPED_LEVELS: [Level; 4] = [
    Level::Category,
    Level::Technology,
    Level::Course,
    Level::Flashcards,
];
const FLAT_LEVELS: [Level; 2] = [Level::Course, Level::Flashcards];

impl Layout {
    /// Level sequence for this layout, top first
    #[must_use]
    pub const fn levels(self) -> &'static [Level] {
        match self {
            Self::Grouped => &GROUPED_LEVELS,
            Self::Flat => &FLAT_LEVELS,
        }
    }

    /// Level a fresh session starts at
    #[must_use]
    pub const fn top(self) -> Level {
        self.levels()[0]
    }

    #[must_use]
    pub fn contains(self, level: Level) -> bool {
        self.levels().contains(&level)
    }

    /// Level directly above `level`, if any
    #[must_use]
    pub fn parent(self, level: Level) -> Option<Level> {
        let levels = self.levels();
        let pos = levels.iter().position(|l| *l == level)?;
        pos.checked_sub(1).map(|p| levels[p])
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Grouped => f.write_str("grouped"),
        }
    }
}

/// Why a transition request was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The request does not apply to the active level
    WrongLevel,
    /// `go_back` at the topmost level
    AtTopLevel,
    /// The jump target is not above the active level
    InvalidTarget,
    UnknownCategory,
    UnknownTechnology,
    UnknownCourse,
    /// The course has no cards
    NotSelectable,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::WrongLevel => "not available at this level",
            Self::AtTopLevel => "already at the top level",
            Self::InvalidTarget => "target level is not above the current one",
            Self::UnknownCategory => "unknown category",
            Self::UnknownTechnology => "unknown technology",
            Self::UnknownCourse => "course not found or not reachable in this layout",
            Self::NotSelectable => "course has no flashcards",
        };
        f.write_str(text)
    }
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The active level changed
    Transitioned { from: Level, to: Level },
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl NavOutcome {
    #[must_use]
    pub const fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Whether this transition left the flashcard level
    #[must_use]
    pub const fn left_flashcards(&self) -> bool {
        matches!(
            self,
            Self::Transitioned {
                from: Level::Flashcards,
                ..
            }
        )
    }
}

/// Current level and bound selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    layout: Layout,
    active: Level,
    selected_category: Option<String>,
    selected_technology: Option<String>,
    selected_course: Option<Course>,
}

impl NavigationState {
    /// Start at the top level of `layout` with nothing selected
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self {
            layout,
            active: layout.top(),
            selected_category: None,
            selected_technology: None,
            selected_course: None,
        }
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub const fn active_level(&self) -> Level {
        self.active
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    #[must_use]
    pub fn selected_technology(&self) -> Option<&str> {
        self.selected_technology.as_deref()
    }

    #[must_use]
    pub const fn selected_course(&self) -> Option<&Course> {
        self.selected_course.as_ref()
    }

    /// Bind `category` and move to the technology level
    ///
    /// `known` is the set of categories currently offered.
    pub fn select_category(&mut self, category: &str, known: &[String]) -> NavOutcome {
        if self.active != Level::Category {
            return NavOutcome::Ignored(IgnoreReason::WrongLevel);
        }
        if !known.iter().any(|c| c == category) {
            return NavOutcome::Ignored(IgnoreReason::UnknownCategory);
        }

        self.selected_category = Some(category.to_string());
        self.move_to(Level::Technology)
    }

    /// Bind `technology` and move to the course level
    ///
    /// `known` is the set of technologies offered for the bound category.
    pub fn select_technology(&mut self, technology: &str, known: &[String]) -> NavOutcome {
        if self.active != Level::Technology || self.selected_category.is_none() {
            return NavOutcome::Ignored(IgnoreReason::WrongLevel);
        }
        if !known.iter().any(|t| t == technology) {
            return NavOutcome::Ignored(IgnoreReason::UnknownTechnology);
        }

        self.selected_technology = Some(technology.to_string());
        self.move_to(Level::Course)
    }

    /// Bind `course` and move to the flashcard level
    ///
    /// Courses without cards are ignored; this is a guard, not an error.
    pub fn select_course(&mut self, course: &Course) -> NavOutcome {
        if self.active != Level::Course {
            return NavOutcome::Ignored(IgnoreReason::WrongLevel);
        }
        if !course.is_selectable() {
            return NavOutcome::Ignored(IgnoreReason::NotSelectable);
        }

        self.selected_course = Some(course.clone());
        self.move_to(Level::Flashcards)
    }

    /// Move one level up, clearing the selection that led down from it
    pub fn go_back(&mut self) -> NavOutcome {
        let Some(parent) = self.layout.parent(self.active) else {
            return NavOutcome::Ignored(IgnoreReason::AtTopLevel);
        };

        let from = self.active;
        self.clear_from(parent);
        self.active = parent;
        debug!("Navigated back from {from} to {parent}");
        NavOutcome::Transitioned { from, to: parent }
    }

    /// Jump straight to `target`, which must lie above the active level
    ///
    /// Equivalent to calling [`go_back`](Self::go_back) until `target` is
    /// active.
    pub fn back_to(&mut self, target: Level) -> NavOutcome {
        if !self.layout.contains(target) || target >= self.active {
            return NavOutcome::Ignored(IgnoreReason::InvalidTarget);
        }

        let from = self.active;
        while self.active != target {
            self.go_back();
        }
        NavOutcome::Transitioned { from, to: target }
    }

    /// Return to the top level, clearing every selection
    pub fn reset(&mut self) -> NavOutcome {
        let top = self.layout.top();
        if self.active == top {
            return NavOutcome::Ignored(IgnoreReason::AtTopLevel);
        }
        self.back_to(top)
    }

    /// Whether exactly the levels above the active one carry a selection
    #[must_use]
    pub fn selections_form_prefix(&self) -> bool {
        self.layout
            .levels()
            .iter()
            .filter(|level| **level != Level::Flashcards)
            .all(|level| self.is_bound(*level) == (*level < self.active))
    }

    fn is_bound(&self, level: Level) -> bool {
        match level {
            Level::Category => self.selected_category.is_some(),
            Level::Technology => self.selected_technology.is_some(),
            Level::Course => self.selected_course.is_some(),
            Level::Flashcards => false,
        }
    }

    /// Clear the selection made at `level` and every level below it
    fn clear_from(&mut self, level: Level) {
        if level <= Level::Category {
            self.selected_category = None;
        }
        if level <= Level::Technology {
            self.selected_technology = None;
        }
        if level <= Level::Course {
            self.selected_course = None;
        }
    }

    fn move_to(&mut self, to: Level) -> NavOutcome {
        let from = self.active;
        self.active = to;
        debug!("Navigated from {from} to {to}");
        NavOutcome::Transitioned { from, to }
    }
}
