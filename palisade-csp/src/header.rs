//! Header name/value pairing for a rendered policy.

use crate::policy::CspConfig;

/// Enforcing policy header
pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";

/// Monitoring-only policy header; violations are reported but not blocked
pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: &str = "Content-Security-Policy-Report-Only";

/// A policy together with the header it should be sent under
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CspHeader {
    pub policy: CspConfig,

    /// Report violations only (doesn't enforce)
    pub report_only: bool,
}

impl CspHeader {
    pub fn new(policy: CspConfig) -> Self {
        Self {
            policy,
            report_only: false,
        }
    }

    /// Send under `Content-Security-Policy-Report-Only`
    pub fn report_only(mut self, enabled: bool) -> Self {
        self.report_only = enabled;
        self
    }

    pub fn name(&self) -> &'static str {
        if self.report_only {
            CONTENT_SECURITY_POLICY_REPORT_ONLY
        } else {
            CONTENT_SECURITY_POLICY
        }
    }

    pub fn value(&self) -> String {
        self.policy.to_header_value()
    }

    /// `(name, value)` ready to be inserted into a response's header map.
    pub fn to_pair(&self) -> (&'static str, String) {
        (self.name(), self.value())
    }
}

impl From<CspConfig> for CspHeader {
    fn from(policy: CspConfig) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enforcing_header() {
        let header = CspHeader::new(CspConfig::new().default_src(["'self'"]));
        assert_eq!(
            header.to_pair(),
            ("Content-Security-Policy", "default-src 'self'".to_string())
        );
    }

    #[test]
    fn test_report_only_header() {
        let header = CspHeader::from(CspConfig::strict()).report_only(true);
        assert_eq!(header.name(), CONTENT_SECURITY_POLICY_REPORT_ONLY);
        assert_eq!(header.value(), CspConfig::strict().to_header_value());
    }
}
