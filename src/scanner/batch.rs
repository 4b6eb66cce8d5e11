//! Batches: the unit of work handed to a worker.
//!
//! The port range is cut into contiguous batches; each worker walks one
//! batch sequentially, so within a batch ports are probed and reported in
//! ascending order.

use crate::output::LiveOutput;
use crate::scanner::collector::ResultCollector;
use crate::scanner::traits::Prober;
use crate::types::{Port, PortRange};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A contiguous, ascending run of ports scanned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// Position in the generated sequence, starting at 0.
    pub index: usize,
    /// Ports covered by this batch.
    pub range: PortRange,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn ports(&self) -> impl Iterator<Item = Port> {
        self.range.iter()
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.index, self.range)
    }
}

/// Partition `range` into batches of `batch_size` ports.
///
/// Batches are gap-free, non-overlapping and ascending; only the last may
/// be shorter. A range smaller than one batch yields a single batch.
pub fn generate_batches(range: PortRange, batch_size: usize) -> Vec<Batch> {
    range
        .chunks(batch_size)
        .enumerate()
        .map(|(index, range)| Batch { index, range })
        .collect()
}

/// Runs one batch against a single host.
///
/// Shared by every worker of a run; all fields are cheap to clone or
/// reference-counted.
#[derive(Clone)]
pub struct BatchScanner {
    prober: Arc<dyn Prober>,
    target: IpAddr,
    timeout: Duration,
    sink: ResultCollector,
    live: LiveOutput,
    cancel: CancellationToken,
}

impl BatchScanner {
    pub fn new(
        prober: Arc<dyn Prober>,
        target: IpAddr,
        timeout: Duration,
        sink: ResultCollector,
        live: LiveOutput,
    ) -> Self {
        Self {
            prober,
            target,
            timeout,
            sink,
            live,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop before the next probe once `cancel` fires.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Probe every port of `batch` in ascending order, pushing open ones to
    /// the sink and announcing them immediately. A failed probe never ends
    /// the batch early; only cancellation does.
    ///
    /// Returns the number of ports actually probed.
    pub async fn run(&self, batch: Batch) -> usize {
        let mut probed = 0;

        for port in batch.ports() {
            if self.cancel.is_cancelled() {
                tracing::debug!(%batch, probed, "batch cancelled");
                break;
            }

            let addr = SocketAddr::new(self.target, port.as_u16());
            if self.prober.probe(addr, self.timeout).await {
                self.sink.push(port);
                self.live.port_open(port);
            }
            probed += 1;
        }

        self.live.batch_done();
        probed
    }
}
