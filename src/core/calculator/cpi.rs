//! Cumulative performance index projection

use super::round2;
use crate::core::models::Course;

/// Sum of credits over every course, including zero-credit ones
#[must_use]
pub fn semester_credits(courses: &[Course]) -> u64 {
    courses.iter().map(|course| u64::from(course.credits)).sum()
}

/// Project the cumulative index after this semester.
///
/// Blends the prior cumulative index (`current_cpi`, over `total_credits`
/// prior credits) with `spi` over this semester's credits. Returns `None`
/// when `spi` is absent or either text input is empty.
///
/// The text inputs go through [`parse_float_prefix`], so non-numeric text
/// becomes NaN and a zero total credit count divides by zero. Neither case is
/// rejected; the non-finite value is returned as-is.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
pub fn project_cpi(
    spi: Option<f64>,
    current_cpi: &str,
    total_credits: &str,
    courses: &[Course],
) -> Option<f64> {
    let spi = spi?;
    if current_cpi.is_empty() || total_credits.is_empty() {
        return None;
    }

    let prior_cpi = parse_float_prefix(current_cpi);
    let prior_credits = parse_float_prefix(total_credits);
    let semester = semester_credits(courses) as f64;

    let projected = (prior_cpi * prior_credits + spi * semester) / (prior_credits + semester);
    Some(round2(projected))
}

/// Parse the longest leading decimal number in `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored (`"7.5abc"` is
/// 7.5). An optional sign, digits with at most one `.`, and an exponent are
/// accepted, as is a leading `Infinity`. Text without a numeric prefix yields
/// NaN.
#[must_use]
pub fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
