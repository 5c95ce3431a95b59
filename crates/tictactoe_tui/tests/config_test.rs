//! Tests for configuration loading.

use std::io::Write;
use std::path::{Path, PathBuf};
use tictactoe_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(!*config.show_history());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_history = true").expect("write");
    writeln!(file, "log_filter = \"debug,tictactoe_engine=trace\"").expect("write");

    let config = TuiConfig::load_or_default(file.path()).expect("valid config");
    assert!(*config.show_history());
    assert_eq!(config.log_filter(), "debug,tictactoe_engine=trace");
    assert_eq!(config.log_file(), Path::new("tictactoe.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_history = \"sometimes\"").expect("write");

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
