pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "line-pacer")]
#[command(about = "Emit a file's header lines at once, then the remaining lines one at a time")]
pub struct CliConfig {
    /// File to replay
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Number of leading lines written immediately as one block
    #[arg(value_name = "NUM_HEADERS")]
    pub num_headers: usize,

    /// Delay between paced lines, in seconds (fractions allowed)
    #[arg(value_name = "SLEEP_INTERVAL", value_parser = parse_sleep_interval)]
    pub sleep_interval: Duration,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Show the feed plan on stderr without emitting anything")]
    pub dry_run: bool,

    #[arg(long, help = "Write logs to stderr as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
fn parse_sleep_interval(raw: &str) -> std::result::Result<Duration, String> {
    validation::parse_seconds("sleep_interval", raw).map_err(|e| e.user_friendly_message())
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn file(&self) -> &str {
        &self.file
    }

    fn num_headers(&self) -> usize {
        self.num_headers
    }

    fn sleep_interval(&self) -> Duration {
        self.sleep_interval
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("file", &self.file)
    }
}
