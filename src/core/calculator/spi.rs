//! Semester performance index

use super::round2;
use crate::core::models::Course;

/// Credit-weighted grade-point average of `courses`, rounded to two decimals.
///
/// Courses with zero credits are ignored. Returns `None` when no course has
/// credits (including an empty list).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_spi(courses: &[Course]) -> Option<f64> {
    let (total_credits, total_points) = courses
        .iter()
        .filter(|course| course.credits != 0)
        .fold((0_u64, 0_u64), |(credits, points), course| {
            (
                credits + u64::from(course.credits),
                points + course.grade_points(),
            )
        });

    if total_credits == 0 {
        None
    } else {
        Some(round2(total_points as f64 / total_credits as f64))
    }
}
