//! Testing utilities for flashdeck
//!
//! Fixture builders for manifests, flashcard files and in-memory data
//! sources, plus a `TempDataDir` wrapper for tests that need real files.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::MemorySource;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// JSON array of `n` cards: `Question 1`/`Answer 1`, ...
///
/// Odd-numbered cards carry a `Basics` section; even ones have none.
#[must_use]
pub fn cards_json(n: usize) -> String {
    let cards: Vec<_> = (1..=n)
        .map(|i| {
            if i % 2 == 1 {
                json!({
                    "question": format!("Question {i}"),
                    "answer": format!("Answer {i}"),
                    "section": "Basics"
                })
            } else {
                json!({"question": format!("Question {i}"), "answer": format!("Answer {i}")})
            }
        })
        .collect();
    serde_json::Value::Array(cards).to_string()
}

/// Manifest JSON from `(id, source, category, technology)` tuples
///
/// Titles are `Course <id>`.
#[must_use]
pub fn manifest_json(courses: &[(&str, &str, Option<&str>, Option<&str>)]) -> String {
    let courses: Vec<_> = courses
        .iter()
        .map(|(id, source, category, technology)| {
            let mut course = json!({
                "CourseID": id,
                "Title": format!("Course {id}"),
                "Description": format!("Description of {id}"),
                "Certifier": "Test Board",
                "Source": source,
            });
            if let Some(category) = category {
                course["Category"] = json!(category);
            }
            if let Some(technology) = technology {
                course["Technology"] = json!(technology);
            }
            course
        })
        .collect();
    json!({ "Courses": courses }).to_string()
}

/// A two-category catalog
///
/// ```text
/// Security / Identity   SC-900 (2 cards), SC-300 (1 card)
/// Security / Network    NET-1 "Network Defense" (1 card)
/// Cloud / Kubernetes    K8S-1 (1 card)
/// (untagged)            MISC (1 card)
/// ```
#[must_use]
pub fn grouped_source() -> MemorySource {
    let manifest = json!({
        "Courses": [
            {"CourseID": "SC-900", "Title": "Security Fundamentals", "Description": "Basics",
             "Certifier": "Microsoft", "Source": "sc900.json",
             "Category": "Security", "Technology": "Identity"},
            {"CourseID": "NET-1", "Title": "Network Defense", "Description": "Firewalls",
             "Certifier": "CompTIA", "Source": "net1.json",
             "Category": "Security", "Technology": "Network"},
            {"CourseID": "SC-300", "Title": "Identity Administrator", "Description": "Entra",
             "Certifier": "Microsoft", "Source": "sc300.json",
             "Category": "Security", "Technology": "Identity"},
            {"CourseID": "K8S-1", "Title": "Kubernetes Basics", "Description": "Pods",
             "Certifier": "CNCF", "Source": "k8s1.json",
             "Category": "Cloud", "Technology": "Kubernetes"},
            {"CourseID": "MISC", "Title": "Miscellany", "Description": "Untagged",
             "Certifier": "Nobody", "Source": "misc.json"}
        ]
    });

    MemorySource::new()
        .with_file("courses.json", manifest.to_string())
        .with_file("sc900.json", cards_json(2))
        .with_file("net1.json", cards_json(1))
        .with_file("sc300.json", cards_json(1))
        .with_file("k8s1.json", cards_json(1))
        .with_file("misc.json", cards_json(1))
}

/// Temporary data directory that is removed on drop
pub struct TempDataDir {
    dir: TempDir,
}

impl TempDataDir {
    /// Create an empty data directory
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp data dir"),
        }
    }

    /// Write `content` to `name` inside the directory
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> &Self {
        fs::write(self.dir.path().join(name), content).expect("Failed to write fixture");
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DataSource, Flashcard, Manifest};

    #[test]
    fn test_cards_json_shape() {
        let cards: Vec<Flashcard> = serde_json::from_str(&cards_json(3)).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].section_label(), "Basics");
        assert_eq!(cards[1].section_label(), "General");
    }

    #[test]
    fn test_manifest_json_optional_tags() {
        let manifest: Manifest = serde_json::from_str(&manifest_json(&[
            ("A", "a.json", Some("Security"), None),
            ("B", "b.json", None, Some("Identity")),
        ]))
        .unwrap();

        assert_eq!(manifest.courses[0].title, "Course A");
        assert_eq!(manifest.courses[0].category.as_deref(), Some("Security"));
        assert!(manifest.courses[0].technology.is_none());
        assert_eq!(manifest.courses[1].technology.as_deref(), Some("Identity"));
    }

    #[test]
    fn test_grouped_source_is_complete() {
        let source = grouped_source();
        for file in [
            "courses.json",
            "sc900.json",
            "net1.json",
            "sc300.json",
            "k8s1.json",
            "misc.json",
        ] {
            assert!(source.fetch(file).is_ok(), "missing fixture {file}");
        }
    }

    #[test]
    fn test_temp_data_dir_cleanup() {
        let path = {
            let dir = TempDataDir::new();
            dir.write("courses.json", "{}");
            assert!(dir.path().join("courses.json").exists());
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
