//! Grades command handler

use grade_calc::GradeCalculator;

/// Print the grade scale, one symbol per line
pub fn run() {
    println!("Grade  Points");
    for grade in GradeCalculator::grade_symbols() {
        println!("{:<5}  {:>6}", grade.symbol(), grade.points());
    }
}
