//! Command-line interface entry point for `gradecalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_calc::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Grades => {
            commands::grades::run();
            true
        }
        Command::Calc {
            input_file,
            cpi,
            total_credits,
            format,
            output,
            save,
        } => {
            let options = commands::calc::CalcOptions {
                input_file: &input_file,
                cpi: cpi.as_deref(),
                total_credits: total_credits.as_deref(),
                format: format.as_deref(),
                output: output.as_deref(),
                save,
            };
            commands::calc::run(&options, &config, verbose)
        }
        Command::Interactive { input_file } => commands::interactive::run(input_file.as_deref()),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
