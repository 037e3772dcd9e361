//! Course model

use super::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credits given to a newly added course
pub const DEFAULT_CREDITS: u32 = 6;

/// Opaque identifier addressing a course inside one calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    /// Accepts `3` or `#3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid course id: '{s}'"))
    }
}

/// Represents one course row of a semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier assigned by the calculator; never shown as data
    pub id: CourseId,

    /// Free-form label (may be empty)
    pub name: String,

    /// Credit count
    pub credits: u32,

    /// Letter grade
    pub grade: Grade,
}

impl Course {
    /// Create a course with default values (`""`, 6 credits, `BC`)
    #[must_use]
    pub const fn new(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            credits: DEFAULT_CREDITS,
            grade: Grade::BC,
        }
    }

    /// Credits multiplied by the grade's point value
    #[must_use]
    pub const fn grade_points(&self) -> u64 {
        self.credits as u64 * self.grade.points() as u64
    }

    /// Apply a single-field edit. The id is never touched.
    pub fn apply(&mut self, edit: CourseEdit) {
        match edit {
            CourseEdit::Name(name) => self.name = name,
            CourseEdit::Credits(credits) => self.credits = credits,
            CourseEdit::Grade(grade) => self.grade = grade,
        }
    }
}

/// Editable course fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    /// Course name
    Name,
    /// Credit count
    Credits,
    /// Letter grade
    Grade,
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "credits" | "credit" => Ok(Self::Credits),
            "grade" => Ok(Self::Grade),
            _ => Err(format!(
                "Unknown course field: '{s}' (expected name, credits or grade)"
            )),
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Credits => "credits",
            Self::Grade => "grade",
        };
        f.write_str(name)
    }
}

/// A replacement value for exactly one course field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseEdit {
    /// New name
    Name(String),
    /// New credit count
    Credits(u32),
    /// New grade
    Grade(Grade),
}

impl CourseEdit {
    /// Build an edit from a field and its textual value
    ///
    /// Names are taken verbatim; credits and grades are parsed.
    ///
    /// # Errors
    /// Returns an error if the value does not parse for the field's type
    pub fn parse(field: CourseField, value: &str) -> Result<Self, String> {
        match field {
            CourseField::Name => Ok(Self::Name(value.to_string())),
            CourseField::Credits => value
                .trim()
                .parse::<u32>()
                .map(Self::Credits)
                .map_err(|_| format!("Invalid credit count: '{value}'")),
            CourseField::Grade => value.parse::<Grade>().map(Self::Grade),
        }
    }

    /// The field this edit replaces
    #[must_use]
    pub const fn field(&self) -> CourseField {
        match self {
            Self::Name(_) => CourseField::Name,
            Self::Credits(_) => CourseField::Credits,
            Self::Grade(_) => CourseField::Grade,
        }
    }
}
