//! Data models for the grade calculator

pub mod course;
pub mod grade;

pub use course::{Course, CourseEdit, CourseField, CourseId, DEFAULT_CREDITS};
pub use grade::Grade;
