//! Plain text output formatting.
//!
//! Produces the human-readable pre-scan header and final summary.

use super::nmap_command;
use crate::config::ScanConfig;
use crate::scanner::ScanReport;
use console::{style, Term};
use std::io::{self, Write};

/// Print the final report to stdout.
pub fn print_report(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report)?;
    out.flush()
}

/// Render the final report: duration, count, per-port listing, and the
/// suggested nmap follow-up when anything was found.
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} Scan of {} completed in {:.2} seconds",
        style("[+]").green().bold(),
        report.target,
        report.duration.as_secs_f64()
    )?;
    if report.interrupted {
        writeln!(
            out,
            "{} Scan interrupted, results below are partial",
            style("[!]").yellow().bold()
        )?;
    }
    writeln!(
        out,
        "{} Total open ports found: {}",
        style("[+]").green().bold(),
        report.open_count()
    )?;

    let Some(command) = nmap_command(&report.target, &report.open_ports) else {
        writeln!(out, "{} No open ports found", style("[+]").green().bold())?;
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "{} Open ports summary:", style("[+]").green().bold())?;
    for port in &report.open_ports {
        writeln!(out, "  - Port {} is open", style(port).green())?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} Suggested nmap commands for further investigation:",
        style("[+]").green().bold()
    )?;
    writeln!(out, "  - Comprehensive scan for all open ports:")?;
    writeln!(out, "    {}", style(command).cyan())?;

    Ok(())
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(config: &ScanConfig) {
    println!();
    println!(
        "{} Scanning {} with level {} configuration",
        style("[+]").green().bold(),
        style(&config.target).white().bold(),
        config.level
    );
    println!(
        "{} Port range: {}",
        style("[+]").green().bold(),
        config.port_range
    );
    println!(
        "{} Timeout: {:.1}s | Max concurrency: {}",
        style("[+]").green().bold(),
        config.timeout.as_secs_f64(),
        config.max_concurrency
    );
    println!("{} Starting scan...", style("[+]").green().bold());
    println!();
}

/// Clear the terminal before the final report. Does nothing when stdout
/// is not a terminal, so piped output keeps the live lines.
pub fn clear_console() {
    let term = Term::stdout();
    if term.is_term() {
        if let Err(e) = term.clear_screen() {
            tracing::debug!(error = %e, "could not clear terminal");
        }
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
