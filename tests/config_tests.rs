//! Integration tests for configuration management

use grade_calc::config::{Config, ConfigOverrides};
use grade_calc::core::report::ReportFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.report.format.is_empty(),
        "Default report format should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[report]
format = "html"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.report.format, "html");
    assert_eq!(config.report_format(), ReportFormat::Html);
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.report.format, "");
    assert_eq!(config.report_format(), ReportFormat::Text);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADECALC/test.log"

[paths]
reports_dir = "$GRADECALC/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gradecalc"));
    assert!(!config.logging.file.contains("$GRADECALC"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$GRADECALC"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config.set("format", "md").expect("Failed to set format");
    assert_eq!(config.get("report_format").as_deref(), Some("markdown"));

    config
        .set("reports-dir", "/tmp/reports")
        .expect("Failed to set reports dir");
    assert_eq!(config.get("reports_dir").as_deref(), Some("/tmp/reports"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();
    let before = config.logging.level.clone();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("format", "pdf").is_err());
    assert_eq!(config.logging.level, before);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("format", "html").expect("Failed to set format");
    config.unset("format", &defaults).expect("Failed to unset format");
    assert_eq!(config.report.format, defaults.report.format);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load_from_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::from_defaults();
    config.set("format", "html").expect("Failed to set format");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.report.format, "html");
}

#[test]
fn test_load_from_missing_file_writes_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let loaded = Config::load_from(&config_file);
    assert!(config_file.exists());
    assert_eq!(loaded.report.format, Config::from_defaults().report.format);
}

#[test]
fn test_load_from_merges_missing_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").expect("write config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "error");
    assert!(!loaded.report.format.is_empty());

    let saved = fs::read_to_string(&config_file).expect("read config");
    assert!(saved.contains("[report]"));
}

#[test]
fn test_load_from_invalid_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "this is = = not toml").expect("write config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        report_format: Some("markdown".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.report_format(), ReportFormat::Markdown);
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let format_before = config.report.format.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.report.format, format_before);
}

#[test]
fn test_config_display_format() {
    let display_str = format!("{}", Config::from_defaults());

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[report]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[report]
format = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.report.format, defaults.report.format);
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
    assert!(Config::get_gradecalc_dir().ends_with("gradecalc"));
}
