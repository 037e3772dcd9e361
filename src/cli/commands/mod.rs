//! CLI command handlers for `gradecalc`.
//!
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod grades;
pub mod interactive;
