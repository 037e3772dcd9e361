//! Integration smoke tests for `grade_calc`

use grade_calc::get_version;

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}
