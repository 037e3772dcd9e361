//! Report generation for calculator state
//!
//! Renders the course list with the SPI and projected CPI as plain text,
//! Markdown or a standalone HTML page.

pub mod formats;

use crate::core::calculator::{format_index, semester_credits};
use crate::core::models::Course;
use crate::core::state::GradeCalculator;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Snapshot of calculator state handed to the reporters
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: &'a str,
    /// Courses in display order
    pub courses: &'a [Course],
    /// Semester performance index
    pub spi: Option<f64>,
    /// Prior cumulative index text
    pub current_cpi: &'a str,
    /// Prior total credits text
    pub total_credits: &'a str,
    /// Projected cumulative index
    pub new_cpi: Option<f64>,
}

impl<'a> ReportContext<'a> {
    /// Default report heading
    pub const DEFAULT_TITLE: &'static str = "SPI and CPI Calculator";

    /// Capture the current state of `calc`
    #[must_use]
    pub fn from_calculator(calc: &'a GradeCalculator) -> Self {
        Self {
            title: Self::DEFAULT_TITLE,
            courses: calc.courses(),
            spi: calc.spi(),
            current_cpi: calc.current_cpi(),
            total_credits: calc.total_credits(),
            new_cpi: calc.new_cpi(),
        }
    }

    /// Replace the heading
    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Sum of credits over all listed courses
    #[must_use]
    pub fn semester_credits(&self) -> u64 {
        semester_credits(self.courses)
    }

    /// SPI for display
    #[must_use]
    pub fn spi_display(&self) -> String {
        format_index(self.spi)
    }

    /// Projected CPI for display
    #[must_use]
    pub fn new_cpi_display(&self) -> String {
        format_index(self.new_cpi)
    }

    /// A text input for display, `—` when unset
    #[must_use]
    pub fn input_display(text: &str) -> &str {
        if text.is_empty() {
            "—"
        } else {
            text
        }
    }

    /// A course name for display, `(unnamed)` when empty
    #[must_use]
    pub fn course_name(course: &Course) -> &str {
        if course.name.is_empty() {
            "(unnamed)"
        } else {
            &course.name
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

/// Fill `{{name}}` placeholders in `template` in a single pass
///
/// Only the template text is scanned, so placeholder syntax inside a
/// substituted value is written out as-is. Unknown placeholders are kept.
pub(crate) fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
