//! Output formatting for CLI display
//!
//! Formats catalog entries for the `list` command. Quiet mode prints bare
//! course IDs for scripting.

use crate::catalog::{Course, CountFailure};
use colored::Colorize;

/// Format a course for display
#[must_use]
pub fn course_line(course: &Course, quiet: bool) -> String {
    if quiet {
        return course.id.clone();
    }

    let count = course.card_count_label();
    let count = if course.is_selectable() {
        count.green().to_string()
    } else {
        count.dimmed().to_string()
    };

    format!(
        "  {} {} ({})",
        course.display_label().bold(),
        count,
        course.certifier_label().dimmed()
    )
}

/// Heading for a category/technology group
#[must_use]
pub fn group_heading(category: &str, technology: &str) -> String {
    format!("{} / {}", category.cyan().bold(), technology.cyan())
}

/// Warning text for a course whose cards could not be counted
#[must_use]
pub fn count_failure_line(failure: &CountFailure) -> String {
    format!(
        "{} counted as 0 cards: {}",
        failure.course_id.yellow(),
        failure.error
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_course_line_is_bare_id() {
        let course = Course::new("AZ-900", "Azure Fundamentals", "az900.json");
        assert_eq!(course_line(&course, true), "AZ-900");
    }

    #[test]
    fn test_course_line_carries_labels() {
        let course =
            Course::new("AZ-900", "Azure Fundamentals", "az900.json").with_certifier("Microsoft");
        let line = course_line(&course, false);

        assert!(line.contains("AZ-900: Azure Fundamentals"));
        assert!(line.contains("0 cards"));
        assert!(line.contains("By: Microsoft"));
    }
}
