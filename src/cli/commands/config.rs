//! Config command handler

use crate::args::ConfigSubcommand;
use grade_calc::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands, returning whether the command succeeded
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) -> bool {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return true;
    };

    match config.get(&k) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("Unknown config key: '{k}'");
            false
        }
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> bool {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        return false;
    }
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        return false;
    }

    println!("✓ Set {key} = {value}");
    true
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> bool {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        return false;
    }
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        return false;
    }

    println!("✓ Reset {key} to default");
    true
}

/// Handle the config reset subcommand
pub fn handle_config_reset() -> bool {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            return false;
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    true
}
