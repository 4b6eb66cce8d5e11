//! Error types for fastscan.
//!
//! Uses `thiserror` for ergonomic error definitions. Individual probe
//! failures are deliberately absent: they never leave the prober.

use crate::types::TargetError;
use thiserror::Error;

/// Errors raised while building the scan configuration.
///
/// All of these are fatal and happen before any probe is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid aggressiveness level {0}, use 1-5")]
    InvalidLevel(u8),

    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    #[error("max concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Errors that can stop a scan run from starting or being reported.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Result type alias for configuration building.
pub type ConfigResult<T> = Result<T, ConfigError>;
