//! Grade-point computations
//!
//! - [`spi`]: semester average over the current course list
//! - [`cpi`]: projected cumulative average from prior CPI and credits
//!
//! Both results are rounded to two decimals with [`round2`].

pub mod cpi;
pub mod spi;

pub use cpi::{parse_float_prefix, project_cpi, semester_credits};
pub use spi::compute_spi;

/// Round to two decimal places, halves away from zero.
///
/// NaN and infinities pass through unchanged.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render an optional index value for display.
///
/// Finite values get two decimals, non-finite values are spelled
/// `NaN`, `Infinity` or `-Infinity`, and an absent value is `—`.
#[must_use]
pub fn format_index(value: Option<f64>) -> String {
    match value {
        None => "—".to_string(),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) if v.is_infinite() && v > 0.0 => "Infinity".to_string(),
        Some(v) if v.is_infinite() => "-Infinity".to_string(),
        Some(v) => format!("{v:.2}"),
    }
}
