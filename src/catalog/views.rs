//! Derived views over the course list
//!
//! All views are computed on demand from the full course list and the
//! currently bound selections. Distinct label sets are returned sorted
//! lexicographically.

use crate::catalog::models::Course;
use std::collections::BTreeSet;

/// Selections that narrow the course list
///
/// An unbound field matches every course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseFilter<'a> {
    pub category: Option<&'a str>,
    pub technology: Option<&'a str>,
}

impl<'a> CourseFilter<'a> {
    /// Filter that matches every course
    pub const ALL: Self = Self {
        category: None,
        technology: None,
    };

    #[must_use]
    pub const fn new(category: Option<&'a str>, technology: Option<&'a str>) -> Self {
        Self {
            category,
            technology,
        }
    }

    /// Whether `course` matches every bound selection
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let category_ok = self
            .category
            .is_none_or(|c| course.category.as_deref() == Some(c));
        let technology_ok = self
            .technology
            .is_none_or(|t| course.technology.as_deref() == Some(t));
        category_ok && technology_ok
    }
}

/// Courses matching `filter`, in manifest order
#[must_use]
pub fn filter_courses<'c>(courses: &'c [Course], filter: &CourseFilter<'_>) -> Vec<&'c Course> {
    courses.iter().filter(|c| filter.matches(c)).collect()
}

/// Distinct categories across all courses
///
/// Courses without a category do not contribute.
#[must_use]
pub fn distinct_categories(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .filter_map(|c| c.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct technologies, optionally restricted to one category
#[must_use]
pub fn distinct_technologies(courses: &[Course], category: Option<&str>) -> Vec<String> {
    let filter = CourseFilter::new(category, None);
    courses
        .iter()
        .filter(|c| filter.matches(c))
        .filter_map(|c| c.technology.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
