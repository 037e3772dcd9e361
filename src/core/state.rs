//! Grade calculator state
//!
//! [`GradeCalculator`] owns the course list and the values derived from it.
//! The SPI is recomputed at the end of every course mutation, so it always
//! reflects the current list. The projected CPI only changes when
//! [`GradeCalculator::calculate_cpi`] runs.

use crate::core::calculator::{compute_spi, project_cpi};
use crate::core::models::{Course, CourseEdit, CourseId, Grade};
use logger::{debug, warn};

/// A course to import: the editable fields without an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    /// Course name
    pub name: String,
    /// Credit count
    pub credits: u32,
    /// Letter grade
    pub grade: Grade,
}

/// View-model for one calculator session
#[derive(Debug, Clone, Default)]
pub struct GradeCalculator {
    courses: Vec<Course>,
    spi: Option<f64>,
    current_cpi: String,
    total_credits: String,
    new_cpi: Option<f64>,
    last_id: u64,
}

impl GradeCalculator {
    /// Create an empty calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course with default values and return its id
    pub fn add_course(&mut self) -> CourseId {
        self.last_id += 1;
        let id = CourseId(self.last_id);
        self.courses.push(Course::new(id));
        debug!("Added course {id}");
        self.commit();
        id
    }

    /// Remove the course with `id`. Unknown ids leave the list untouched.
    ///
    /// Returns whether a course was removed.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|course| course.id != id);
        let removed = self.courses.len() != before;
        if removed {
            debug!("Removed course {id}");
        } else {
            debug!("Remove ignored: no course {id}");
        }
        self.commit();
        removed
    }

    /// Replace one field of the course with `id`. Unknown ids are ignored.
    ///
    /// Returns whether a course was updated.
    pub fn update_course(&mut self, id: CourseId, edit: CourseEdit) -> bool {
        let field = edit.field();
        let updated = match self.courses.iter_mut().find(|course| course.id == id) {
            Some(course) => {
                course.apply(edit);
                debug!("Updated {field} of course {id}");
                true
            }
            None => {
                debug!("Update ignored: no course {id}");
                false
            }
        };
        self.commit();
        updated
    }

    /// Append one course per entry, going through the regular add/update path
    ///
    /// Returns the ids of the new courses in entry order.
    pub fn import<I>(&mut self, entries: I) -> Vec<CourseId>
    where
        I: IntoIterator<Item = CourseEntry>,
    {
        entries
            .into_iter()
            .map(|entry| {
                let id = self.add_course();
                self.update_course(id, CourseEdit::Name(entry.name));
                self.update_course(id, CourseEdit::Credits(entry.credits));
                self.update_course(id, CourseEdit::Grade(entry.grade));
                id
            })
            .collect()
    }

    /// Set the prior cumulative index text (empty means unset)
    pub fn set_current_cpi(&mut self, text: impl Into<String>) {
        self.current_cpi = text.into();
    }

    /// Set the prior total credits text (empty means unset)
    pub fn set_total_credits(&mut self, text: impl Into<String>) {
        self.total_credits = text.into();
    }

    /// Project the cumulative index from the current SPI and prior inputs
    ///
    /// Resets the projection to `None` when the SPI is absent or either text
    /// input is empty.
    pub fn calculate_cpi(&mut self) -> Option<f64> {
        self.new_cpi = project_cpi(
            self.spi,
            &self.current_cpi,
            &self.total_credits,
            &self.courses,
        );
        match self.new_cpi {
            Some(value) if !value.is_finite() => warn!(
                "Projected CPI is not a finite number (current CPI '{}', total credits '{}')",
                self.current_cpi, self.total_credits
            ),
            Some(value) => debug!("Projected CPI {value:.2}"),
            None => debug!("CPI projection unavailable"),
        }
        self.new_cpi
    }

    /// Courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up one course
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Current SPI, `None` until some course has credits
    #[must_use]
    pub const fn spi(&self) -> Option<f64> {
        self.spi
    }

    /// Last projected CPI
    #[must_use]
    pub const fn new_cpi(&self) -> Option<f64> {
        self.new_cpi
    }

    /// Prior cumulative index text
    #[must_use]
    pub fn current_cpi(&self) -> &str {
        &self.current_cpi
    }

    /// Prior total credits text
    #[must_use]
    pub fn total_credits(&self) -> &str {
        &self.total_credits
    }

    /// The selectable grade symbols
    #[must_use]
    pub const fn grade_symbols() -> &'static [Grade] {
        &Grade::ALL
    }

    fn commit(&mut self) {
        self.spi = compute_spi(&self.courses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let calc = GradeCalculator::new();
        assert!(calc.courses().is_empty());
        assert_eq!(calc.spi(), None);
        assert_eq!(calc.new_cpi(), None);
        assert_eq!(calc.current_cpi(), "");
        assert_eq!(calc.total_credits(), "");
    }

    #[test]
    fn test_add_course_uses_defaults_and_recomputes() {
        let mut calc = GradeCalculator::new();
        let id = calc.add_course();
        let course = calc.course(id).expect("course exists");
        assert_eq!(course.name, "");
        assert_eq!(course.credits, 6);
        assert_eq!(course.grade, Grade::BC);
        assert_eq!(calc.spi(), Some(7.0));
    }

    #[test]
    fn test_ids_are_unique_after_removal() {
        let mut calc = GradeCalculator::new();
        let first = calc.add_course();
        calc.remove_course(first);
        let second = calc.add_course();
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_last_course_clears_spi() {
        let mut calc = GradeCalculator::new();
        let id = calc.add_course();
        assert!(calc.spi().is_some());
        assert!(calc.remove_course(id));
        assert_eq!(calc.spi(), None);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut calc = GradeCalculator::new();
        calc.add_course();
        let before = calc.courses().to_vec();
        assert!(!calc.update_course(CourseId(99), CourseEdit::Credits(1)));
        assert_eq!(calc.courses(), before.as_slice());
    }

    #[test]
    fn test_zero_credits_makes_spi_absent() {
        let mut calc = GradeCalculator::new();
        let id = calc.add_course();
        calc.update_course(id, CourseEdit::Credits(0));
        assert_eq!(calc.spi(), None);
    }

    #[test]
    fn test_text_inputs_do_not_touch_projection() {
        let mut calc = GradeCalculator::new();
        calc.add_course();
        calc.set_current_cpi("8");
        calc.set_total_credits("30");
        let projected = calc.calculate_cpi();
        assert!(projected.is_some());

        calc.set_current_cpi("");
        assert_eq!(calc.new_cpi(), projected);
        assert_eq!(calc.calculate_cpi(), None);
        assert_eq!(calc.new_cpi(), None);
    }

    #[test]
    fn test_import_runs_through_operations() {
        let mut calc = GradeCalculator::new();
        let ids = calc.import(vec![
            CourseEntry {
                name: "Algorithms".to_string(),
                credits: 6,
                grade: Grade::BC,
            },
            CourseEntry {
                name: "Networks".to_string(),
                credits: 4,
                grade: Grade::CC,
            },
        ]);
        assert_eq!(ids.len(), 2);
        assert_eq!(calc.courses()[1].name, "Networks");
        assert_eq!(calc.spi(), Some(6.6));
    }

    #[test]
    fn test_grade_symbols() {
        let symbols: Vec<&str> = GradeCalculator::grade_symbols()
            .iter()
            .map(|g| g.symbol())
            .collect();
        assert_eq!(
            symbols,
            ["AP", "AA", "AB", "BB", "BC", "CC", "CD", "DD", "FR"]
        );
    }
}
