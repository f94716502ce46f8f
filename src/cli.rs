//! Command-line interface components.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "nifty-cards")]
#[command(about = "Turn a Nifty 50 technical analysis report into summary cards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Report file path or http(s) URL (defaults to the newest report in the drafts directory)
    #[arg(value_name = "REPORT")]
    pub input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write cards to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory searched for reports when REPORT is not given
    #[arg(long, value_name = "DIR")]
    pub drafts_dir: Option<PathBuf>,

    /// Hide cards whose absolute signal strength is below this value
    #[arg(long, value_name = "STRENGTH")]
    pub min_strength: Option<f64>,

    /// Timeout in seconds for fetching a remote report
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether progress output should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
