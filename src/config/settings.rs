//! Scan configuration.
//!
//! Built once at startup from the aggressiveness level and port range,
//! then shared read-only with every worker for the lifetime of the run.

use super::level::Aggressiveness;
use crate::error::{ConfigError, ConfigResult};
use crate::types::{PortRange, ScanTarget};
use std::time::Duration;

/// Number of ports handed to a worker as one unit of work.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Immutable parameters for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Host being scanned.
    pub target: ScanTarget,
    /// Level the timing parameters were derived from.
    pub level: Aggressiveness,
    /// Connect timeout for each probe.
    pub timeout: Duration,
    /// Upper bound on batches in flight.
    pub max_concurrency: usize,
    /// Ports to scan.
    pub port_range: PortRange,
    /// Ports per batch.
    pub batch_size: usize,
}

impl ScanConfig {
    /// Derive a configuration from an aggressiveness level.
    pub fn new(target: ScanTarget, level: Aggressiveness, port_range: PortRange) -> Self {
        Self {
            target,
            level,
            timeout: level.timeout(),
            max_concurrency: level.max_concurrency(),
            port_range,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> ConfigResult<Self> {
        if batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Override the concurrency cap derived from the level.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> ConfigResult<Self> {
        if max_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        self.max_concurrency = max_concurrency;
        Ok(self)
    }
}
