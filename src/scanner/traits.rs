//! Prober trait abstraction.
//!
//! Defines the single-port probing interface the batch scanner depends on,
//! so the scheduling logic can be exercised with fakes.

use async_trait::async_trait;
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

/// What a single connect attempt observed.
///
/// Only [`Prober::probe`] callers outside the prober see a boolean; every
/// variant except `Open` collapses to "not open" there, so closed and
/// filtered ports are indistinguishable to the rest of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The handshake completed.
    Open,
    /// The peer actively refused the connection.
    Closed,
    /// No answer within the timeout.
    TimedOut,
    /// Any other socket-level failure (unreachable, reset, ...).
    Failed(io::ErrorKind),
}

impl ProbeOutcome {
    /// Check if the port accepted the connection.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::TimedOut => write!(f, "timed out"),
            Self::Failed(kind) => write!(f, "failed ({kind})"),
        }
    }
}

/// Trait for single-port open/not-open classifiers.
///
/// # Example
///
/// ```ignore
/// use fastscan::scanner::{Prober, TcpProber};
///
/// let open = TcpProber.probe("127.0.0.1:22".parse()?, Duration::from_secs(1)).await;
/// ```
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns true iff a connection to `addr` is established within
    /// `timeout`. Never blocks longer than `timeout` and never fails.
    async fn probe(&self, addr: SocketAddr, timeout: Duration) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_open_is_open() {
        assert!(ProbeOutcome::Open.is_open());
        assert!(!ProbeOutcome::Closed.is_open());
        assert!(!ProbeOutcome::TimedOut.is_open());
        assert!(!ProbeOutcome::Failed(io::ErrorKind::Other).is_open());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ProbeOutcome::Open.to_string(), "open");
        assert_eq!(ProbeOutcome::TimedOut.to_string(), "timed out");
    }
}
