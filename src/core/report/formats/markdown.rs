//! Markdown report generator

use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        fill_template(
            MARKDOWN_TEMPLATE,
            &[
                ("title", escape_markdown(ctx.title)),
                ("course_table", Self::course_table(ctx)),
                ("course_count", ctx.courses.len().to_string()),
                ("semester_credits", ctx.semester_credits().to_string()),
                ("spi", ctx.spi_display()),
                (
                    "current_cpi",
                    escape_markdown(ReportContext::input_display(ctx.current_cpi)),
                ),
                (
                    "total_credits",
                    escape_markdown(ReportContext::input_display(ctx.total_credits)),
                ),
                ("new_cpi", ctx.new_cpi_display()),
            ],
        )
    }

    fn course_table(ctx: &ReportContext) -> String {
        if ctx.courses.is_empty() {
            return "_No courses entered._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Course | Credits | Grade | Points |\n");
        table.push_str("|---|---:|:---:|---:|\n");
        for course in ctx.courses {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                escape_markdown(ReportContext::course_name(course)),
                course.credits,
                course.grade,
                course.grade.points()
            );
        }
        table
    }
}

/// Backslash-escape Markdown markup so user text renders literally
///
/// Covers `|` too, which would otherwise split a table cell.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' | '~'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::escape_markdown;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("**bold** _x_"), "\\*\\*bold\\*\\* \\_x\\_");
        assert_eq!(escape_markdown("a|b [c]"), "a\\|b \\[c\\]");
        assert_eq!(escape_markdown("Data Structures 7.5"), "Data Structures 7.5");
    }
}
