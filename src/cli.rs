//! Command-line interface parsing for Revboard
//!
//! This module handles parsing of CLI arguments using clap: the reviews
//! endpoint URL and the refresh interval.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::reviews::DEFAULT_ENDPOINT;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The refresh interval must be at least one second
    #[error("Invalid interval: {0}s. The refresh interval must be at least 1 second")]
    InvalidInterval(u64),
}

/// Revboard - Live table of product reviews in your terminal
#[derive(Parser, Debug)]
#[command(name = "revboard")]
#[command(about = "Live-polling product review dashboard")]
#[command(version)]
pub struct Cli {
    /// URL of the reviews endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Refresh interval in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    pub interval: u64,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Reviews endpoint the fetch client targets
    pub endpoint: String,
    /// Interval between background fetch attempts
    pub interval: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval: Duration::from_secs(5),
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the endpoint and interval
    /// * `Err(CliError)` if the interval is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.interval == 0 {
            return Err(CliError::InvalidInterval(cli.interval));
        }

        Ok(StartupConfig {
            endpoint: cli.url.clone(),
            interval: Duration::from_secs(cli.interval),
        })
    }
}
