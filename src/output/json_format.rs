//! JSON output formatting.

use super::nmap_command;
use crate::config::Aggressiveness;
use crate::scanner::ScanReport;
use crate::types::Port;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use std::net::IpAddr;

/// Serialized view of a [`ScanReport`].
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    ip: IpAddr,
    range: String,
    level: Aggressiveness,
    started_at: DateTime<Utc>,
    duration_secs: f64,
    open_ports: &'a [Port],
    interrupted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    nmap_command: Option<String>,
}

impl<'a> From<&'a ScanReport> for JsonReport<'a> {
    fn from(report: &'a ScanReport) -> Self {
        Self {
            target: &report.target,
            ip: report.ip,
            range: report.port_range.to_string(),
            level: report.level,
            started_at: report.started_at,
            duration_secs: report.duration.as_secs_f64(),
            open_ports: &report.open_ports,
            interrupted: report.interrupted,
            nmap_command: nmap_command(&report.target, &report.open_ports),
        }
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(report))?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Print the report in JSON format to stdout.
pub fn print_json(report: &ScanReport) -> serde_json::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, report)
}
