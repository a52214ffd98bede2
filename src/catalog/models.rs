//! Catalog data types
//!
//! Field names on the wire follow the manifest format (`CourseID`, `Title`,
//! ...) while the Rust side uses snake case.

use serde::{Deserialize, Serialize};

/// Section label shown for cards that do not name one
pub const DEFAULT_SECTION: &str = "General";

/// Top-level manifest document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "Courses")]
    pub courses: Vec<Course>,
}

/// A certified grouping of flashcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "CourseID")]
    pub id: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    #[serde(rename = "Certifier", default)]
    pub certifier: String,

    /// Flashcard file, relative to the data directory
    #[serde(rename = "Source")]
    pub source: String,

    #[serde(rename = "Technology", default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,

    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Derived during catalog load; 0 when the flashcard file failed to load
    #[serde(skip)]
    card_count: usize,
}

impl Course {
    /// Create a course with the required fields
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            certifier: String::new(),
            source: source.into(),
            technology: None,
            category: None,
            card_count: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_certifier(mut self, certifier: impl Into<String>) -> Self {
        self.certifier = certifier.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    /// Number of flashcards found during catalog load
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.card_count
    }

    pub(crate) const fn set_card_count(&mut self, count: usize) {
        self.card_count = count;
    }

    /// Whether the course can be opened for study
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.card_count > 0
    }

    /// Heading shown in selection lists, e.g. `AZ-900: Azure Fundamentals`
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{}: {}", self.id, self.title)
    }

    /// Certifier line, e.g. `By: Microsoft`
    #[must_use]
    pub fn certifier_label(&self) -> String {
        format!("By: {}", self.certifier)
    }

    /// Card count line, e.g. `12 cards`
    #[must_use]
    pub fn card_count_label(&self) -> String {
        format!("{} cards", self.card_count)
    }
}

/// A single question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl Flashcard {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            section: None,
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Section label, falling back to [`DEFAULT_SECTION`]
    #[must_use]
    pub fn section_label(&self) -> &str {
        match self.section.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_SECTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_deserializes_wire_names() {
        let json = r#"{
            "Courses": [
                {
                    "CourseID": "SC-900",
                    "Title": "Security Fundamentals",
                    "Description": "Intro course",
                    "Certifier": "Microsoft",
                    "Source": "sc900.json",
                    "Technology": "Identity",
                    "Category": "Security"
                },
                {
                    "CourseID": "X-1",
                    "Title": "Bare",
                    "Source": "x1.json"
                }
            ]
        }"#;

        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.courses.len(), 2);

        let first = &manifest.courses[0];
        assert_eq!(first.id, "SC-900");
        assert_eq!(first.category.as_deref(), Some("Security"));
        assert_eq!(first.technology.as_deref(), Some("Identity"));
        assert_eq!(first.card_count(), 0);

        let bare = &manifest.courses[1];
        assert!(bare.category.is_none());
        assert!(bare.description.is_empty());
    }

    #[test]
    fn test_course_labels() {
        let mut course = Course::new("AZ-900", "Azure Fundamentals", "az900.json")
            .with_certifier("Microsoft");
        course.set_card_count(12);

        assert_eq!(course.display_label(), "AZ-900: Azure Fundamentals");
        assert_eq!(course.certifier_label(), "By: Microsoft");
        assert_eq!(course.card_count_label(), "12 cards");
        assert!(course.is_selectable());
    }

    #[test]
    fn test_course_without_cards_is_not_selectable() {
        let course = Course::new("B", "Empty", "b.json");
        assert!(!course.is_selectable());
        assert_eq!(course.card_count_label(), "0 cards");
    }

    #[test]
    fn test_flashcard_section_defaults_to_general() {
        let cards: Vec<Flashcard> = serde_json::from_str(
            r#"[
                {"question": "Q1", "answer": "A1"},
                {"question": "Q2", "answer": "A2", "section": "Networking"},
                {"question": "Q3", "answer": "A3", "section": ""}
            ]"#,
        )
        .unwrap();

        assert_eq!(cards[0].section_label(), "General");
        assert_eq!(cards[1].section_label(), "Networking");
        assert_eq!(cards[2].section_label(), "General");
    }
}
