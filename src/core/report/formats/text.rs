//! Plain-text report generator
//!
//! Used for terminal output: the interactive session prints this after
//! every change.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        if ctx.courses.is_empty() {
            table.push_str("  (no courses)\n");
            return table;
        }

        let name_width = ctx
            .courses
            .iter()
            .map(|c| ReportContext::course_name(c).chars().count())
            .max()
            .unwrap_or(0)
            .max("Course".len());

        let _ = writeln!(
            table,
            "  {:<5} {:<name_width$} {:>7}  Grade",
            "Id", "Course", "Credits"
        );
        for course in ctx.courses {
            let _ = writeln!(
                table,
                "  {:<5} {:<name_width$} {:>7}  {}",
                course.id.to_string(),
                ReportContext::course_name(course),
                course.credits,
                course.grade
            );
        }
        table
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        let _ = writeln!(out, "{}", ctx.title);
        let _ = writeln!(out, "{}", "=".repeat(ctx.title.chars().count()));
        out.push_str(&Self::course_table(ctx));
        let _ = writeln!(out);
        let _ = writeln!(out, "  Semester credits: {}", ctx.semester_credits());
        let _ = writeln!(out, "  SPI:              {}", ctx.spi_display());
        let _ = writeln!(
            out,
            "  Current CPI:      {}",
            ReportContext::input_display(ctx.current_cpi)
        );
        let _ = writeln!(
            out,
            "  Total credits:    {}",
            ReportContext::input_display(ctx.total_credits)
        );
        let _ = writeln!(out, "  New CPI:          {}", ctx.new_cpi_display());
        Ok(out)
    }
}
