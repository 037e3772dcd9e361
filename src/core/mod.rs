//! Core calculator functionality

pub mod actions;
pub mod calculator;
pub mod config;
pub mod models;
pub mod report;
pub mod semester;
pub mod state;

/// Returns the current version of the `grade-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
