//! List command - print the course catalog with card counts

use crate::{
    FlashdeckError,
    catalog::{Catalog, Course, CourseFilter},
    output,
    study::Layout,
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, FlashdeckError>;

/// Execute the list command
///
/// The flat layout prints courses in manifest order. The grouped layout
/// prints them under category/technology headings, which leaves out courses
/// missing either tag.
///
/// # Errors
///
/// Currently infallible; returns `Result` for parity with other commands.
pub fn execute(
    catalog: &Catalog,
    filter: &CourseFilter<'_>,
    layout: Layout,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let matching = catalog.filtered(filter);
    if matching.is_empty() {
        if !quiet {
            out.info("No courses found.");
        }
        return Ok(());
    }

    match layout {
        Layout::Flat => list_flat(&matching, out, quiet),
        Layout::Grouped => list_grouped(catalog, filter, &matching, out, quiet),
    }

    if !quiet {
        let failures = catalog
            .failures()
            .iter()
            .filter(|f| matching.iter().any(|c| c.id == f.course_id));
        for failure in failures {
            out.warning(&output::count_failure_line(failure));
        }
    }
    Ok(())
}

fn list_flat(courses: &[&Course], out: &dyn OutputWriter, quiet: bool) {
    if !quiet {
        out.write("Courses:");
    }
    for course in courses {
        out.write(&output::course_line(course, quiet));
    }
}

fn list_grouped(
    catalog: &Catalog,
    filter: &CourseFilter<'_>,
    matching: &[&Course],
    out: &dyn OutputWriter,
    quiet: bool,
) {
    let categories = catalog
        .categories()
        .into_iter()
        .filter(|c| filter.category.is_none_or(|f| f == c.as_str()));

    for category in categories {
        let technologies = catalog
            .technologies(Some(category.as_str()))
            .into_iter()
            .filter(|t| filter.technology.is_none_or(|f| f == t.as_str()));

        for technology in technologies {
            let group = catalog.filtered(&CourseFilter::new(
                Some(category.as_str()),
                Some(technology.as_str()),
            ));
            if group.is_empty() {
                continue;
            }
            if !quiet {
                out.write(&output::group_heading(&category, &technology));
            }
            for course in group {
                out.write(&output::course_line(course, quiet));
            }
        }
    }

    let untagged = matching
        .iter()
        .filter(|c| c.category.is_none() || c.technology.is_none())
        .count();
    if untagged > 0 && !quiet {
        out.info(&format!(
            "{untagged} course(s) without a category or technology are not shown"
        ));
    }
}
