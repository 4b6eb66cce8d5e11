//! Concurrency-safe sink for open ports.
//!
//! Every worker holds a clone of the same collector and pushes into it;
//! the run drains it once, after the scheduler has finished.

use crate::types::Port;
use std::sync::{Arc, Mutex, PoisonError};

/// Multi-producer collector of discovered open ports.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    ports: Arc<Mutex<Vec<Port>>>,
}

impl ResultCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an open port. Safe to call from any number of workers.
    pub fn push(&self, port: Port) {
        self.ports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(port);
    }

    /// Number of ports recorded so far.
    pub fn len(&self) -> usize {
        self.ports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take every recorded port, sorted ascending, leaving the collector
    /// empty. Call only after all producers have finished.
    pub fn drain(&self) -> Vec<Port> {
        let mut ports =
            std::mem::take(&mut *self.ports.lock().unwrap_or_else(PoisonError::into_inner));
        ports.sort_unstable();
        ports
    }
}
