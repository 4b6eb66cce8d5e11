//! Command-line interface definitions for fastscan.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use crate::config::{Aggressiveness, ScanConfig};
use crate::error::ScanResult;
use crate::output::OutputFormat;
use crate::types::{PortRange, ScanTarget};
use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;

/// A fast concurrent TCP connect scanner.
#[derive(Parser, Debug)]
#[command(name = "fastscan")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A fast concurrent TCP connect scanner", long_about = None)]
#[command(after_help = "Levels: 1-5 (higher = more aggressive scanning)\n\
    Example: fastscan 192.168.1.1 -t 4 -r 1-1000")]
pub struct Args {
    /// Target IP address or hostname to scan
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Aggressiveness level, 1 (1.0s timeout, 100 workers) to 5 (0.2s, 500 workers)
    #[arg(short = 't', long = "level", value_name = "LEVEL", value_parser = parse_level)]
    pub level: Aggressiveness,

    /// Port range to scan, e.g. "1-1000"
    #[arg(short = 'r', long = "range", value_name = "START-END", default_value = "1-65535")]
    pub range: PortRange,

    /// Ports handed to one worker at a time
    #[arg(short = 'b', long = "batch-size", default_value = "100")]
    pub batch_size: NonZeroUsize,

    /// Output format for the final report
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Keep live output on screen instead of clearing it before the report
    #[arg(long)]
    pub no_clear: bool,

    /// Show a progress bar while scanning
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolve the target and build the scan configuration.
    pub async fn scan_config(&self) -> ScanResult<ScanConfig> {
        let target = ScanTarget::resolve(&self.target).await?;
        let config = ScanConfig::new(target, self.level, self.range)
            .with_batch_size(self.batch_size.get())?;
        Ok(config)
    }

    /// Log filter directive implied by `-v`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parse an aggressiveness level given as `1`..`5`.
fn parse_level(s: &str) -> Result<Aggressiveness, String> {
    let level: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid level '{}', use 1-5", s))?;
    Aggressiveness::try_from(level).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_minimal_invocation() {
        let args = Args::try_parse_from(["fastscan", "127.0.0.1", "-t", "1"]).unwrap();
        assert_eq!(args.target, "127.0.0.1");
        assert_eq!(args.level, Aggressiveness::L1);
        assert_eq!(args.range, PortRange::full());
        assert_eq!(args.batch_size.get(), 100);
        assert_eq!(args.output, OutputFormat::Plain);
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::try_parse_from([
            "fastscan",
            "scanme.nmap.org",
            "-t",
            "4",
            "-r",
            "1-1000",
            "-b",
            "50",
            "-o",
            "json",
            "--no-clear",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.level, Aggressiveness::L4);
        assert_eq!(args.range.to_string(), "1-1000");
        assert_eq!(args.batch_size.get(), 50);
        assert_eq!(args.output, OutputFormat::Json);
        assert!(args.no_clear);
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_missing_level_rejected() {
        let err = Args::try_parse_from(["fastscan", "127.0.0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Args::try_parse_from(["fastscan"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_invalid_level_rejected() {
        for level in ["0", "6", "x", "2.5", "-1"] {
            assert!(
                Args::try_parse_from(["fastscan", "127.0.0.1", "-t", level]).is_err(),
                "level {level} accepted"
            );
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        for range in ["5000-10", "0-100", "1-65536", "abc", "100"] {
            let err = Args::try_parse_from(["fastscan", "127.0.0.1", "-t", "1", "-r", range])
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "range {range}");
        }
    }

    #[test]
    fn test_missing_range_value_rejected() {
        assert!(Args::try_parse_from(["fastscan", "127.0.0.1", "-t", "1", "-r"]).is_err());
    }

    #[tokio::test]
    async fn test_scan_config_from_args() {
        let args =
            Args::try_parse_from(["fastscan", "127.0.0.1", "-t", "5", "-r", "1-100", "-b", "25"])
                .unwrap();
        let config = args.scan_config().await.unwrap();

        assert_eq!(config.target.original, "127.0.0.1");
        assert_eq!(config.timeout, std::time::Duration::from_millis(200));
        assert_eq!(config.max_concurrency, 500);
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.port_range.len(), 100);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(Args::try_parse_from(["fastscan", "127.0.0.1", "-t", "1", "-b", "0"]).is_err());
    }
}
