//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` is the inclusive `<start>-<end>` range a scan covers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(u32::from(value)))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u32),
    #[error("invalid port number: '{0}'")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("invalid port range '{0}', expected <start>-<end> such as 1-1000")]
    MissingSeparator(String),
}

/// An inclusive range of ports. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Every port, 1-65535.
    pub const fn full() -> Self {
        Self {
            start: Port(Port::MIN),
            end: Port(Port::MAX),
        }
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// Always false; a valid range holds at least one port.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in this range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }

    /// Split into contiguous sub-ranges of `size` ports, ascending. The last
    /// chunk may be shorter. A `size` of zero is treated as one.
    pub fn chunks(&self, size: usize) -> Chunks {
        let size = u16::try_from(size).unwrap_or(u16::MAX).max(1);
        Chunks {
            next: Some(self.start.0),
            end: self.end.0,
            size,
        }
    }
}

/// Iterator returned by [`PortRange::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks {
    next: Option<u16>,
    end: u16,
    size: u16,
}

impl Iterator for Chunks {
    type Item = PortRange;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next?;
        let last = start.saturating_add(self.size - 1).min(self.end);
        self.next = if last == self.end { None } else { Some(last + 1) };

        Some(PortRange {
            start: Port(start),
            end: Port(last),
        })
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for PortRange {
    type Err = PortError;

    /// Parse `"<start>-<end>"`, requiring `1 <= start <= end <= 65535`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PortError::MissingSeparator(s.to_string()))?;

        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        Self::new(start, end)
    }
}

/// Parse one side of a range. Numbers above 65535 are `OutOfRange`, not
/// `InvalidFormat`.
fn parse_bound(raw: &str) -> Result<Port, PortError> {
    let raw = raw.trim();
    let value: u32 = raw
        .parse()
        .map_err(|_| PortError::InvalidFormat(raw.to_string()))?;

    u16::try_from(value)
        .ok()
        .and_then(Port::new)
        .ok_or(PortError::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(80).is_some());
        assert!(Port::new(65535).is_some());
        assert_eq!(Port::try_from(0), Err(PortError::OutOfRange(0)));
    }

    #[test]
    fn test_port_range_len() {
        let range: PortRange = "1-100".parse().unwrap();
        assert_eq!(range.len(), 100);
        assert_eq!(PortRange::full().len(), 65535);

        let single: PortRange = "443-443".parse().unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single, PortRange::single(Port::new(443).unwrap()));
    }

    #[test]
    fn test_range_iter_is_ascending() {
        let range: PortRange = "20-25".parse().unwrap();
        let ports: Vec<u16> = range.iter().map(Port::as_u16).collect();
        assert_eq!(ports, vec![20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(
            "5000-10".parse::<PortRange>(),
            Err(PortError::InvalidRange(5000, 10))
        );
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let high = Port::new(443).unwrap();
        let low = Port::new(80).unwrap();
        assert_eq!(
            PortRange::new(high, low),
            Err(PortError::InvalidRange(443, 80))
        );
        assert_eq!(PortRange::new(low, high).unwrap().len(), 364);
    }

    #[test]
    fn test_range_serializes_bounds() {
        let range: PortRange = "22-80".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"start":22,"end":80}"#
        );
    }

    #[test]
    fn test_range_rejects_out_of_bounds() {
        assert_eq!("0-10".parse::<PortRange>(), Err(PortError::OutOfRange(0)));
        assert_eq!(
            "1-70000".parse::<PortRange>(),
            Err(PortError::OutOfRange(70000))
        );
    }

    #[test]
    fn test_range_rejects_malformed() {
        assert!(matches!(
            "1000".parse::<PortRange>(),
            Err(PortError::MissingSeparator(_))
        ));
        assert!(matches!(
            "a-b".parse::<PortRange>(),
            Err(PortError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1-2-3".parse::<PortRange>(),
            Err(PortError::InvalidFormat(_))
        ));
        assert!(matches!(
            "".parse::<PortRange>(),
            Err(PortError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_range_display_round_trips_default() {
        assert_eq!(PortRange::default().to_string(), "1-65535");
    }
}
