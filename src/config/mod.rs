//! Configuration for a scan run.
//!
//! Maps the user's aggressiveness level to timing parameters and bundles
//! them with the target and port range.

mod level;
mod settings;

pub use level::Aggressiveness;
pub use settings::{ScanConfig, DEFAULT_BATCH_SIZE};
