//! Aggressiveness levels.
//!
//! A level is the one knob the user turns: higher levels trade a shorter
//! connect timeout for more batches in flight at once.

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// A scan aggressiveness level, 1 (gentle) to 5 (aggressive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Aggressiveness {
    L1,
    L2,
    L3,
    L4,
    L5,
}

impl Aggressiveness {
    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [Self::L1, Self::L2, Self::L3, Self::L4, Self::L5];

    /// Per-probe connect timeout for this level.
    pub const fn timeout(self) -> Duration {
        match self {
            Self::L1 => Duration::from_millis(1000),
            Self::L2 => Duration::from_millis(800),
            Self::L3 => Duration::from_millis(600),
            Self::L4 => Duration::from_millis(400),
            Self::L5 => Duration::from_millis(200),
        }
    }

    /// Maximum number of batches scanned at the same time.
    pub const fn max_concurrency(self) -> usize {
        match self {
            Self::L1 => 100,
            Self::L2 => 200,
            Self::L3 => 300,
            Self::L4 => 400,
            Self::L5 => 500,
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            Self::L1 => 1,
            Self::L2 => 2,
            Self::L3 => 3,
            Self::L4 => 4,
            Self::L5 => 5,
        }
    }
}

impl TryFrom<u8> for Aggressiveness {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            4 => Ok(Self::L4),
            5 => Ok(Self::L5),
            other => Err(ConfigError::InvalidLevel(other)),
        }
    }
}

impl From<Aggressiveness> for u8 {
    fn from(level: Aggressiveness) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for Aggressiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
