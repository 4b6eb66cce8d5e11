//! TCP connect prober.
//!
//! Performs standard TCP connect attempts using the operating system's
//! socket API. No payload is sent; an established connection is closed
//! as soon as it is observed.

use crate::scanner::traits::{ProbeOutcome, Prober};
use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// TCP connect prober.
///
/// Does not require elevated privileges. Cannot tell a closed port from a
/// filtered one: a firewall that silently drops packets reads as a timeout,
/// and both collapse to "not open".
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

impl TcpProber {
    /// Attempt one connection and classify what happened.
    pub async fn classify(&self, addr: SocketAddr, limit: Duration) -> ProbeOutcome {
        match timeout(limit, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                ProbeOutcome::Open
            }
            Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => ProbeOutcome::Closed,
            Ok(Err(e)) => ProbeOutcome::Failed(e.kind()),
            Err(_) => ProbeOutcome::TimedOut,
        }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: SocketAddr, limit: Duration) -> bool {
        let outcome = self.classify(addr, limit).await;
        if !outcome.is_open() {
            tracing::trace!(%addr, %outcome, "port not open");
        }
        outcome.is_open()
    }
}
