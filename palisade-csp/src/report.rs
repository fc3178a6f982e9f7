//! CSP violation reports
//!
//! Shape of the JSON body a browser POSTs to a policy's `report-uri`.
//! Receiving the request and acting on the report is up to the caller.
//!
//! ref: <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Security-Policy-Report-Only>

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CSP violation report
///
/// Fields the browser leaves out decode to empty strings / `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ViolationReport {
    /// URI of the resource that was blocked. Cross-origin URIs are truncated
    /// to scheme, host and port.
    pub blocked_uri: String,
    /// `"enforce"` or `"report"`, depending on which header carried the policy.
    pub disposition: String,
    /// URI of the document in which the violation occurred.
    pub document_uri: String,
    /// Directive whose enforcement caused the violation.
    pub effective_directive: String,
    /// The policy as it was delivered.
    pub original_policy: String,
    /// Referrer of the violating document.
    pub referrer: String,
    /// First 40 characters of the inline script, event handler or style
    /// that caused the violation.
    pub script_sample: String,
    /// HTTP status of the resource on which the global object was instantiated.
    /// Not range-checked; browsers send `0` when the status is unknown.
    pub status_code: i64,
    /// Name of the policy section that was violated.
    pub violated_directive: String,
}

/// The `{"csp-report": {...}}` wrapper browsers send around a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    #[serde(rename = "csp-report")]
    pub csp_report: ViolationReport,
}

const ENVELOPE_KEY: &str = "csp-report";

impl ViolationReport {
    /// Decode a report body, with or without the `csp-report` wrapper.
    ///
    /// The wrapper is recognised by its key alone, so a wrapped report whose
    /// contents fail to decode is an error rather than an empty report.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let mut value: Value = serde_json::from_slice(body)?;

        let report: ViolationReport = match value.get_mut(ENVELOPE_KEY) {
            Some(inner) => serde_json::from_value(inner.take())?,
            None => serde_json::from_value(value)?,
        };

        palisade_log::debug!(
            target: "palisade::csp::report",
            "decoded violation of {} on {}",
            report.violated_directive,
            report.document_uri
        );

        Ok(report)
    }
}

impl From<ViolationReport> for ReportEnvelope {
    fn from(csp_report: ViolationReport) -> Self {
        Self { csp_report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CspError;

    const WRAPPED: &str = r#"{
        "csp-report": {
            "blocked-uri": "http://evil.example.com",
            "disposition": "enforce",
            "document-uri": "https://example.com/signup",
            "effective-directive": "script-src-elem",
            "original-policy": "default-src 'self'; report-uri /csp",
            "referrer": "",
            "script-sample": "",
            "status-code": 200,
            "violated-directive": "script-src-elem"
        }
    }"#;

    #[test]
    fn test_decode_wrapped_report() {
        let report = ViolationReport::from_json(WRAPPED.as_bytes()).unwrap();
        assert_eq!(report.blocked_uri, "http://evil.example.com");
        assert_eq!(report.status_code, 200);
        assert_eq!(report.violated_directive, "script-src-elem");
        assert_eq!(report.original_policy, "default-src 'self'; report-uri /csp");
    }

    #[test]
    fn test_decode_bare_report_with_missing_fields() {
        let body = br#"{"document-uri": "https://example.com/", "violated-directive": "img-src"}"#;
        let report = ViolationReport::from_json(body).unwrap();
        assert_eq!(report.document_uri, "https://example.com/");
        assert_eq!(report.violated_directive, "img-src");
        assert_eq!(report.blocked_uri, "");
        assert_eq!(report.status_code, 0);
    }

    #[test]
    fn test_wire_keys() {
        let report = ViolationReport {
            script_sample: "alert(1)".to_string(),
            status_code: 404,
            ..Default::default()
        };
        let value = serde_json::to_value(ReportEnvelope::from(report)).unwrap();
        assert_eq!(value["csp-report"]["script-sample"], "alert(1)");
        assert_eq!(value["csp-report"]["status-code"], 404);
        assert!(value["csp-report"].get("effective-directive").is_some());
    }

    #[test]
    fn test_malformed_body() {
        let err = ViolationReport::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, CspError::InvalidReport(_)));

        let err = ViolationReport::from_json(br#"{"status-code": "ok"}"#).unwrap_err();
        assert!(matches!(err, CspError::InvalidReport(_)));
    }
}
