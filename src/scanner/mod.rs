//! Scanner module - coordinates a complete connect scan.
//!
//! The port range is split into batches, batches are dispatched to a
//! bounded pool of tokio workers, open ports flow into a shared collector,
//! and once the pool has drained the collector is frozen into a
//! [`ScanReport`].

pub mod batch;
pub mod collector;
pub mod scheduler;
pub mod tcp;
pub mod traits;

use crate::config::{Aggressiveness, ScanConfig};
use crate::output::LiveOutput;
use crate::types::{Port, PortRange};
use chrono::{DateTime, Utc};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

pub use batch::{generate_batches, Batch, BatchScanner};
pub use collector::ResultCollector;
pub use scheduler::{DispatchSummary, ScanScheduler};
pub use tcp::TcpProber;
pub use traits::{ProbeOutcome, Prober};

/// Complete result of one scan run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Target as the user typed it.
    pub target: String,
    /// Address that was actually probed.
    pub ip: IpAddr,
    pub port_range: PortRange,
    pub level: Aggressiveness,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    /// Open ports, ascending.
    pub open_ports: Vec<Port>,
    /// True if the run was cancelled; `open_ports` is then partial.
    pub interrupted: bool,
}

impl ScanReport {
    /// Number of open ports found.
    pub fn open_count(&self) -> usize {
        self.open_ports.len()
    }
}

/// Execute a complete port scan with `prober`.
///
/// Announces each open port through `live` as it is found. Cancelling
/// `cancel` stops new probes; the report is still produced from whatever
/// was found up to that point.
pub async fn run_scan(
    config: &ScanConfig,
    prober: Arc<dyn Prober>,
    live: LiveOutput,
    cancel: CancellationToken,
) -> ScanReport {
    let started_at = Utc::now();
    let start_time = Instant::now();

    let batches = generate_batches(config.port_range, config.batch_size);
    let collector = ResultCollector::new();
    let batch_scanner = BatchScanner::new(
        prober,
        config.target.ip,
        config.timeout,
        collector.clone(),
        live,
    )
    .with_cancel(cancel.clone());

    tracing::info!(
        host = %config.target,
        range = %config.port_range,
        level = %config.level,
        timeout_ms = config.timeout.as_millis() as u64,
        max_concurrency = config.max_concurrency,
        batches = batches.len(),
        "starting scan"
    );

    let summary = ScanScheduler::new(config.max_concurrency)
        .with_cancel(cancel.clone())
        .execute(batches, move |batch| {
            let scanner = batch_scanner.clone();
            async move {
                scanner.run(batch).await;
            }
        })
        .await;

    let open_ports = collector.drain();
    let duration = start_time.elapsed();
    let interrupted = cancel.is_cancelled() || summary.panicked > 0;

    if interrupted {
        tracing::warn!(?summary, "scan did not cover the full range");
    }
    tracing::info!(
        open = open_ports.len(),
        elapsed_ms = duration.as_millis() as u64,
        "scan finished"
    );

    ScanReport {
        target: config.target.original.clone(),
        ip: config.target.ip,
        port_range: config.port_range,
        level: config.level,
        started_at,
        duration,
        open_ports,
        interrupted,
    }
}
