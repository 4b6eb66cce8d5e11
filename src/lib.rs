//! # fastscan - A Concurrent TCP Connect Scanner
//!
//! fastscan completes a TCP handshake against every port in a range,
//! reports the ports that accept connections as it finds them, and ends
//! with a summary plus a ready-to-run nmap command for the open ports.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use fastscan::config::{Aggressiveness, ScanConfig};
//! use fastscan::output::LiveOutput;
//! use fastscan::scanner::{run_scan, TcpProber};
//! use fastscan::types::ScanTarget;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let target = ScanTarget::resolve("192.168.1.1").await?;
//!     let config = ScanConfig::new(target, Aggressiveness::L3, "1-1000".parse()?);
//!
//!     let report = run_scan(
//!         &config,
//!         Arc::new(TcpProber),
//!         LiveOutput::stdout(),
//!         CancellationToken::new(),
//!     )
//!     .await;
//!
//!     println!("{} open ports", report.open_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated ports, port ranges and targets
//! - [`config`] - Aggressiveness levels and the immutable scan configuration
//! - [`scanner`] - Prober, batches, the bounded worker pool and result collector
//! - [`output`] - Live notifications and the final report
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::{Aggressiveness, ScanConfig};
pub use error::{ConfigError, ScanError};
pub use scanner::{run_scan, Prober, ScanReport, TcpProber};
pub use types::{Port, PortRange, ScanTarget};
