//! Semester input files

pub mod csv_parser;

pub use csv_parser::{parse_semester_csv, parse_semester_str};
