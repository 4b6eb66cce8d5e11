//! Output formatting module.
//!
//! Live per-port notifications during the scan, and plain text or JSON
//! rendering of the final report.

mod json_format;
mod live;
mod plain;

pub use json_format::{print_json, write_json};
pub use live::LiveOutput;
pub use plain::{
    clear_console, print_error, print_report, print_scan_header, print_warning, write_report,
};

use crate::error::ScanResult;
use crate::scanner::ScanReport;
use crate::types::Port;

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Format and print the final report according to the specified format.
pub fn print_results(report: &ScanReport, format: OutputFormat) -> ScanResult<()> {
    match format {
        OutputFormat::Plain => print_report(report)?,
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}

/// Build the nmap follow-up command for `ports`, which must already be
/// sorted. Returns `None` when there is nothing to follow up on.
pub fn nmap_command(target: &str, ports: &[Port]) -> Option<String> {
    if ports.is_empty() {
        return None;
    }

    let port_list = ports
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Some(format!("nmap -p {} -sV -sC -A {}", port_list, target))
}
