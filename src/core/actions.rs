//! User actions accepted by the calculator
//!
//! Each variant is one interaction point of the form. The text syntax parsed
//! by [`Action::from_str`] is what the interactive session reads:
//!
//! ```text
//! add
//! remove 2            (also: rm #2)
//! set 2 name Linear Algebra
//! set 2 credits 4
//! set 2 grade AB
//! cpi 7.25
//! credits 80
//! calc
//! ```

use crate::core::models::{CourseEdit, CourseField, CourseId};
use crate::core::state::GradeCalculator;
use std::str::FromStr;

/// A state change requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a course with default values
    AddCourse,
    /// Remove a course
    RemoveCourse(CourseId),
    /// Replace one field of a course
    EditCourse(CourseId, CourseEdit),
    /// Set the prior cumulative index text
    SetCurrentCpi(String),
    /// Set the prior total credits text
    SetTotalCredits(String),
    /// Run the CPI projection
    CalculateCpi,
}

/// What applying an [`Action`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A course was added with this id
    Added(CourseId),
    /// Whether a course was removed
    Removed(bool),
    /// Whether a course was updated
    Updated(bool),
    /// A CPI text input was stored
    InputSet,
    /// Result of the CPI projection
    Calculated(Option<f64>),
}

impl GradeCalculator {
    /// Dispatch an action to the matching operation
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::AddCourse => Outcome::Added(self.add_course()),
            Action::RemoveCourse(id) => Outcome::Removed(self.remove_course(id)),
            Action::EditCourse(id, edit) => Outcome::Updated(self.update_course(id, edit)),
            Action::SetCurrentCpi(text) => {
                self.set_current_cpi(text);
                Outcome::InputSet
            }
            Action::SetTotalCredits(text) => {
                self.set_total_credits(text);
                Outcome::InputSet
            }
            Action::CalculateCpi => Outcome::Calculated(self.calculate_cpi()),
        }
    }
}

/// Split off the first whitespace-delimited word
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    text.find(char::is_whitespace)
        .map_or((text, ""), |idx| (&text[..idx], text[idx..].trim_start()))
}

impl FromStr for Action {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (keyword, rest) = split_word(line.trim());
        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::AddCourse),
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err("Usage: remove <id>".to_string());
                }
                rest.parse().map(Self::RemoveCourse)
            }
            "set" => {
                let (id, rest) = split_word(rest);
                let (field, value) = split_word(rest);
                if id.is_empty() || field.is_empty() {
                    return Err("Usage: set <id> <name|credits|grade> <value>".to_string());
                }
                let id: CourseId = id.parse()?;
                let field: CourseField = field.parse()?;
                if field != CourseField::Name && value.is_empty() {
                    return Err(format!("Missing value for {field}"));
                }
                CourseEdit::parse(field, value).map(|edit| Self::EditCourse(id, edit))
            }
            "cpi" => Ok(Self::SetCurrentCpi(rest.to_string())),
            "credits" => Ok(Self::SetTotalCredits(rest.to_string())),
            "calc" | "calculate" => Ok(Self::CalculateCpi),
            "" => Err("Empty command".to_string()),
            other => Err(format!("Unknown command: '{other}'")),
        }
    }
}
