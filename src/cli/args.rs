//! CLI argument definitions for `gradecalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_calc::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `format`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print the grade scale.
    Grades,
    /// Compute SPI (and optionally CPI) for a semester CSV file.
    ///
    /// The file lists one course per line as `name,credits,grade`.
    Calc {
        /// Path to the semester CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Current cumulative CPI before this semester
        #[arg(long, value_name = "CPI")]
        cpi: Option<String>,

        /// Total credits earned before this semester
        #[arg(long, value_name = "CREDITS")]
        total_credits: Option<String>,

        /// Output format: text, markdown (md) or html. Defaults to config `format`.
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Write the report to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the report into the configured reports directory
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },
    /// Edit a course list interactively.
    ///
    /// Reads commands from stdin (`add`, `set 1 grade AA`, `cpi 7.5`, `calc`, ...).
    Interactive {
        /// Optional semester CSV file to start from
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradecalc",
    about = "Semester and cumulative grade-point calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default report format
    #[arg(long = "config-report-format", value_name = "FORMAT")]
    pub config_report_format: Option<String>,

    /// Override config default report format (short form)
    #[arg(long = "report-format", value_name = "FORMAT")]
    pub report_format: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            report_format: self
                .report_format
                .clone()
                .or_else(|| self.config_report_format.clone()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_report_format: None,
            report_format: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Grades,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.report_format.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/gradecalc.log")),
            config_verbose: Some(true),
            report_format: Some("html".to_string()),
            reports_dir: Some(PathBuf::from("/out")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/gradecalc.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.report_format, Some("html".to_string()));
        assert_eq!(overrides.reports_dir, Some("/out".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_report_format: Some("markdown".to_string()),
            report_format: Some("html".to_string()),
            config_reports_dir: Some(PathBuf::from("/long")),
            reports_dir: Some(PathBuf::from("/short")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.report_format, Some("html".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = Cli {
            config_report_format: Some("markdown".to_string()),
            config_reports_dir: Some(PathBuf::from("/long")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.report_format, Some("markdown".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long".to_string()));
    }

    #[test]
    fn test_parse_calc_command() {
        let cli = Cli::try_parse_from([
            "gradecalc",
            "calc",
            "sem.csv",
            "--cpi",
            "7.5",
            "--total-credits",
            "80",
            "-f",
            "md",
        ])
        .expect("valid arguments");
        match cli.command {
            Command::Calc {
                input_file,
                cpi,
                total_credits,
                format,
                output,
                save,
            } => {
                assert_eq!(input_file, PathBuf::from("sem.csv"));
                assert_eq!(cpi.as_deref(), Some("7.5"));
                assert_eq!(total_credits.as_deref(), Some("80"));
                assert_eq!(format.as_deref(), Some("md"));
                assert!(output.is_none());
                assert!(!save);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_output_conflicts_with_save() {
        let result =
            Cli::try_parse_from(["gradecalc", "calc", "sem.csv", "-o", "out.md", "--save"]);
        assert!(result.is_err());
    }
}
