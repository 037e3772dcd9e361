//! Interactive session handler
//!
//! Reads one command per line, applies it to the calculator and prints the
//! updated summary.

use grade_calc::core::calculator::format_index;
use grade_calc::core::report::{ReportContext, ReportGenerator, TextReporter};
use grade_calc::core::semester::parse_semester_csv;
use grade_calc::{Action, GradeCalculator, Outcome};
use logger::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  add                               add a course (6 credits, grade BC)
  remove <id>                       remove a course
  set <id> name <text>              rename a course
  set <id> credits <n>              change credits
  set <id> grade <symbol>           change grade
  cpi <value>                       set current CPI (empty to clear)
  credits <value>                   set total prior credits (empty to clear)
  calc                              calculate the new CPI
  show                              print the current state
  grades                            list grade symbols and points
  help                              show this help
  quit                              leave the session";

/// Run an interactive session on stdin/stdout, optionally preloading a CSV.
///
/// Returns whether the session ended normally.
pub fn run(input_file: Option<&Path>) -> bool {
    let mut calc = GradeCalculator::new();
    if let Some(path) = input_file {
        match parse_semester_csv(path) {
            Ok(entries) => {
                calc.import(entries);
                info!("Preloaded {} course(s) from {}", calc.courses().len(), path.display());
            }
            Err(e) => {
                error!("Failed to load {}: {e}", path.display());
                eprintln!("✗ Failed to load {}: {e}", path.display());
                return false;
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&mut calc, stdin.lock(), stdout.lock()) {
        Ok(()) => true,
        Err(e) => {
            error!("Interactive session aborted: {e}");
            eprintln!("✗ {e}");
            false
        }
    }
}

/// Drive `calc` from `input` until end of input or `quit`
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn run_session<R: BufRead, W: Write>(
    calc: &mut GradeCalculator,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Type 'help' for commands.")?;
    print_summary(calc, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        debug!("Session command: '{command}'");

        match command.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(output, "{HELP}")?,
            "show" => print_summary(calc, &mut output)?,
            "grades" => {
                let symbols: Vec<String> = GradeCalculator::grade_symbols()
                    .iter()
                    .map(|g| format!("{g}={}", g.points()))
                    .collect();
                writeln!(output, "{}", symbols.join("  "))?;
            }
            _ => match command.parse::<Action>() {
                Ok(action) => {
                    let outcome = calc.apply(action);
                    writeln!(output, "{}", describe(outcome))?;
                    print_summary(calc, &mut output)?;
                }
                Err(e) => writeln!(output, "✗ {e}")?,
            },
        }
    }

    Ok(())
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Added(id) => format!("✓ Added course {id}"),
        Outcome::Removed(true) => "✓ Removed course".to_string(),
        Outcome::Removed(false) | Outcome::Updated(false) => "No such course".to_string(),
        Outcome::Updated(true) => "✓ Updated course".to_string(),
        Outcome::InputSet => "✓ Saved".to_string(),
        Outcome::Calculated(value) => format!("New CPI: {}", format_index(value)),
    }
}

fn print_summary<W: Write>(calc: &GradeCalculator, output: &mut W) -> io::Result<()> {
    let ctx = ReportContext::from_calculator(calc);
    let text = TextReporter::new()
        .render(&ctx)
        .map_err(|e| io::Error::other(e.to_string()))?;
    write!(output, "{text}")
}
