//! HTML report generator
//!
//! Produces a self-contained page with embedded CSS.

use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        fill_template(
            HTML_TEMPLATE,
            &[
                ("title", escape_html(ctx.title)),
                ("course_rows", Self::course_rows(ctx)),
                ("semester_credits", ctx.semester_credits().to_string()),
                ("spi", ctx.spi_display()),
                (
                    "current_cpi",
                    escape_html(ReportContext::input_display(ctx.current_cpi)),
                ),
                (
                    "total_credits",
                    escape_html(ReportContext::input_display(ctx.total_credits)),
                ),
                ("new_cpi", ctx.new_cpi_display()),
            ],
        )
    }

    fn course_rows(ctx: &ReportContext) -> String {
        if ctx.courses.is_empty() {
            return "        <tr><td colspan=\"4\" class=\"empty\">No courses entered.</td></tr>\n"
                .to_string();
        }

        let mut rows = String::new();
        for course in ctx.courses {
            let _ = writeln!(
                rows,
                "        <tr><td>{}</td><td class=\"num\">{}</td><td>{}</td><td class=\"num\">{}</td></tr>",
                escape_html(ReportContext::course_name(course)),
                course.credits,
                course.grade,
                course.grade.points()
            );
        }
        rows
    }
}

/// Escape text for HTML element content and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}
