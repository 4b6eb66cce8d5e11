//! Scan target type and hostname resolution.
//!
//! A target is given on the command line as an IP literal (IPv4 or IPv6)
//! or a hostname. Hostnames are resolved once, before any probe is sent.

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// A single scan target that has been resolved to an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScanTarget {
    /// The original input (hostname or IP string).
    pub original: String,
    /// The resolved IP address.
    pub ip: IpAddr,
}

impl ScanTarget {
    /// Create a new scan target.
    pub fn new(original: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            original: original.into(),
            ip,
        }
    }

    /// Resolve `input` to a target. IP literals skip DNS entirely; for
    /// hostnames the first address returned wins.
    pub async fn resolve(input: &str) -> Result<Self, TargetError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TargetError::InvalidFormat(input.to_string()));
        }

        if let Ok(ip) = input.parse::<IpAddr>() {
            return Ok(Self::new(input, ip));
        }

        if !is_valid_hostname(input) {
            return Err(TargetError::InvalidFormat(input.to_string()));
        }

        let resolver =
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
        let response = resolver
            .lookup_ip(input)
            .await
            .map_err(|e| TargetError::DnsResolutionFailed(input.to_string(), e.to_string()))?;

        let ip = response
            .iter()
            .next()
            .ok_or_else(|| TargetError::NoAddressesFound(input.to_string()))?;

        tracing::debug!(host = input, %ip, "resolved target");
        Ok(Self::new(input, ip))
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original == self.ip.to_string() {
            write!(f, "{}", self.ip)
        } else {
            write!(f, "{} ({})", self.original, self.ip)
        }
    }
}

/// Error type for target parsing and resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    #[error("invalid target format: '{0}'")]
    InvalidFormat(String),
    #[error("failed to resolve hostname '{0}': {1}")]
    DnsResolutionFailed(String, String),
    #[error("no IP addresses found for hostname '{0}'")]
    NoAddressesFound(String),
}

/// Check a hostname against RFC 1123 label rules.
fn is_valid_hostname(s: &str) -> bool {
    if s.len() > 253 {
        return false;
    }

    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_resolve_ipv4_literal() {
        let target = tokio_test::block_on(ScanTarget::resolve("127.0.0.1")).unwrap();
        assert_eq!(target.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(target.original, "127.0.0.1");
        assert_eq!(target.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_resolve_ipv6_literal() {
        let target = tokio_test::block_on(ScanTarget::resolve("::1")).unwrap();
        assert_eq!(target.ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let err = tokio_test::block_on(ScanTarget::resolve("not a host!")).unwrap_err();
        assert!(matches!(err, TargetError::InvalidFormat(_)));

        let err = tokio_test::block_on(ScanTarget::resolve("   ")).unwrap_err();
        assert!(matches!(err, TargetError::InvalidFormat(_)));
    }

    #[test]
    fn test_display_with_hostname() {
        let target = ScanTarget::new("gateway.lan", IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(target.to_string(), "gateway.lan (10.0.0.1)");
    }

    #[test]
    fn test_hostname_validation() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("localhost"));
        assert!(!is_valid_hostname("-bad.com"));
        assert!(!is_valid_hostname("bad..com"));
        assert!(!is_valid_hostname("under_score.com"));
    }
}
