//! Semester (SPI) and cumulative (CPI) grade-point calculator
//!
//! The [`GradeCalculator`](core::state::GradeCalculator) view-model holds a
//! list of courses and keeps the SPI in step with it; the CPI projection runs
//! on request. The `gradecalc` binary drives it from the command line.

pub mod core;

pub use crate::core::actions::{Action, Outcome};
pub use crate::core::config;
pub use crate::core::get_version;
pub use crate::core::models::{Course, CourseEdit, CourseField, CourseId, Grade};
pub use crate::core::state::{CourseEntry, GradeCalculator};
