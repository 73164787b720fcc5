//! Integration tests for CLI argument handling
//!
//! Tests the --url and --interval flags from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_revboard"))
        .args(args)
        .output()
        .expect("Failed to execute revboard")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("revboard"), "Help should mention revboard");
    assert!(stdout.contains("url"), "Help should mention --url flag");
    assert!(
        stdout.contains("interval"),
        "Help should mention --interval flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_zero_interval_prints_error_and_exits() {
    let output = run_cli(&["--interval", "0"]);
    assert!(!output.status.success(), "Expected zero interval to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid") || stderr.contains("invalid"),
        "Should print error message about the invalid interval: {}",
        stderr
    );
}

#[test]
fn test_non_numeric_interval_is_rejected_by_clap() {
    let output = run_cli(&["--interval", "soon"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use revboard::cli::{Cli, StartupConfig};
    use std::time::Duration;

    #[test]
    fn test_cli_defaults_resolve_to_config() {
        let cli = Cli::parse_from(["revboard"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.interval, Duration::from_secs(5));
        assert!(config.endpoint.contains("/api/reviews"));
    }

    #[test]
    fn test_cli_custom_url_flows_into_config() {
        let cli = Cli::parse_from(["revboard", "--url", "http://reviews.local/api/reviews"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.endpoint, "http://reviews.local/api/reviews");
    }

    #[test]
    fn test_cli_zero_interval_is_invalid() {
        let cli = Cli::parse_from(["revboard", "--interval", "0"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
