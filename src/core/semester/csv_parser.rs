//! CSV parser for semester course lists
//!
//! One course per line as `name,credits,grade`:
//!
//! ```text
//! name,credits,grade
//! Data Structures,6,AA
//! Probability,4,BC
//! # audit course, no credits
//! Seminar,0,AB
//! ```
//!
//! The header row is optional. Blank lines and `#` comments are skipped.
//! Empty credits mean 0 and an empty grade means `BC`.

use crate::core::models::Grade;
use crate::core::state::CourseEntry;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a semester CSV file into course entries
///
/// # Errors
/// Returns an error if the file cannot be read or a row is malformed
pub fn parse_semester_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CourseEntry>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_semester_str(&content)?)
}

/// Parse semester CSV text into course entries
///
/// # Errors
/// Returns an error naming the 1-based line number of the first malformed row
pub fn parse_semester_str(content: &str) -> Result<Vec<CourseEntry>, String> {
    let mut entries = Vec::new();
    let mut seen_row = false;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields = parse_csv_line(trimmed);
        if !seen_row {
            seen_row = true;
            if is_header(&fields) {
                continue;
            }
        }

        let entry = parse_course_fields(&fields).map_err(|e| format!("line {line_no}: {e}"))?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Split a CSV line on commas, honoring double-quoted fields
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// A first row whose credits column holds no digits at all is a header
///
/// Numeric-looking values such as `-4` or `4.5` are course rows and go
/// through the usual validation.
fn is_header(fields: &[String]) -> bool {
    fields
        .get(1)
        .is_some_and(|credits| !credits.is_empty() && !credits.chars().any(|c| c.is_ascii_digit()))
}

fn parse_course_fields(fields: &[String]) -> Result<CourseEntry, String> {
    if fields.len() > 3 {
        return Err(format!("expected 3 columns, found {}", fields.len()));
    }

    let name = fields.first().cloned().unwrap_or_default();
    let credits = match fields.get(1).map(String::as_str) {
        None | Some("") => 0,
        Some(text) => text
            .parse::<u32>()
            .map_err(|_| format!("invalid credit count '{text}'"))?,
    };
    let grade = match fields.get(2).map(String::as_str) {
        None | Some("") => Grade::default(),
        Some(text) => text.parse::<Grade>()?,
    };

    Ok(CourseEntry {
        name,
        credits,
        grade,
    })
}
