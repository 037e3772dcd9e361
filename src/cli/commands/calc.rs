//! Calc command handler
//!
//! Loads a semester CSV, computes the SPI and, when CPI inputs are given,
//! the projected CPI, then prints or writes a report.

use grade_calc::config::Config;
use grade_calc::core::report::{reporter_for, ReportContext, ReportFormat, ReportGenerator};
use grade_calc::core::semester::parse_semester_csv;
use grade_calc::GradeCalculator;
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Options for one `calc` run
pub struct CalcOptions<'a> {
    /// Semester CSV file
    pub input_file: &'a Path,
    /// Prior cumulative CPI text
    pub cpi: Option<&'a str>,
    /// Prior total credits text
    pub total_credits: Option<&'a str>,
    /// Explicit report format
    pub format: Option<&'a str>,
    /// Explicit output path
    pub output: Option<&'a Path>,
    /// Write into the configured reports directory
    pub save: bool,
}

/// Run the calc command, returning whether it succeeded.
pub fn run(options: &CalcOptions, config: &Config, verbose: bool) -> bool {
    match calculate(options, config, verbose) {
        Ok(()) => true,
        Err(err) => {
            error!("Calc failed for {}: {err}", options.input_file.display());
            eprintln!("{err}");
            false
        }
    }
}

fn calculate(options: &CalcOptions, config: &Config, verbose: bool) -> Result<(), String> {
    let format = match options.format {
        Some(text) => text.parse::<ReportFormat>().map_err(|e| format!("✗ {e}"))?,
        None => config.report_format(),
    };

    let entries = parse_semester_csv(options.input_file).map_err(|e| {
        format!("✗ Failed to load {}: {e}", options.input_file.display())
    })?;

    let mut calc = GradeCalculator::new();
    calc.import(entries);
    if verbose {
        println!(
            "✓ Loaded {} course(s) from: {}",
            calc.courses().len(),
            options.input_file.display()
        );
    } else {
        info!(
            "Loaded {} course(s) from {}",
            calc.courses().len(),
            options.input_file.display()
        );
    }

    if options.cpi.is_some() || options.total_credits.is_some() {
        calc.set_current_cpi(options.cpi.unwrap_or_default());
        calc.set_total_credits(options.total_credits.unwrap_or_default());
        calc.calculate_cpi();
    }

    let title = options
        .input_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string());
    let mut ctx = ReportContext::from_calculator(&calc);
    if let Some(title) = title.as_deref() {
        ctx = ctx.with_title(title);
    }

    let reporter = reporter_for(format);
    let output_path = match (options.output, options.save) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(default_report_path(options.input_file, format, config)?),
        (None, false) => None,
    };

    match output_path {
        Some(path) => {
            reporter
                .generate(&ctx, &path)
                .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
            println!("✓ Report written: {}", path.display());
            info!("Wrote {format} report to {}", path.display());
        }
        None => {
            let content = reporter
                .render(&ctx)
                .map_err(|e| format!("✗ Failed to render report: {e}"))?;
            print!("{content}");
        }
    }

    Ok(())
}

/// `<reports_dir>/<input stem>.<ext>`, creating the directory if needed
fn default_report_path(
    input_file: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .map_or_else(|| "semester".into(), |s| s.to_string_lossy());
    Ok(reports_dir.join(format!("{stem}.{}", format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_semester(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("fall.csv");
        fs::write(&path, "name,credits,grade\nAlgorithms,6,BC\nNetworks,4,CC\n")
            .expect("write csv");
        path
    }

    fn config_with_reports_dir(dir: &Path) -> Config {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = dir.to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_writes_markdown_to_output() {
        let dir = TempDir::new().expect("temp dir");
        let input = write_semester(&dir);
        let output = dir.path().join("out.md");
        let options = CalcOptions {
            input_file: &input,
            cpi: Some("7.00"),
            total_credits: Some("20"),
            format: Some("md"),
            output: Some(&output),
            save: false,
        };

        assert!(run(&options, &Config::from_defaults(), false));
        let content = fs::read_to_string(&output).expect("report written");
        assert!(content.starts_with("# fall"));
        assert!(content.contains("**SPI:** 6.60"));
        assert!(content.contains("**New CPI:** 6.87"));
    }

    #[test]
    fn test_save_uses_reports_dir() {
        let dir = TempDir::new().expect("temp dir");
        let input = write_semester(&dir);
        let reports = dir.path().join("reports");
        let options = CalcOptions {
            input_file: &input,
            cpi: None,
            total_credits: None,
            format: Some("html"),
            output: None,
            save: true,
        };

        assert!(run(&options, &config_with_reports_dir(&reports), false));
        assert!(reports.join("fall.html").exists());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.csv");
        let options = CalcOptions {
            input_file: &missing,
            cpi: None,
            total_credits: None,
            format: None,
            output: None,
            save: false,
        };
        assert!(!run(&options, &Config::from_defaults(), false));
    }

    #[test]
    fn test_bad_format_fails() {
        let dir = TempDir::new().expect("temp dir");
        let input = write_semester(&dir);
        let options = CalcOptions {
            input_file: &input,
            cpi: None,
            total_credits: None,
            format: Some("pdf"),
            output: None,
            save: false,
        };
        assert!(!run(&options, &Config::from_defaults(), false));
    }
}
