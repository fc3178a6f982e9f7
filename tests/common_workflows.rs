//! Integration tests for common Palisade workflows.
//!
//! These tests go through the facade crate the way an application would.

use palisade::prelude::*;

// =============================================================================
// Serving a policy
// =============================================================================

#[test]
fn test_attach_policy_to_response_headers() {
    let policy = CspConfig::new()
        .default_src(["'self'", "static.example.com"])
        .img_src(["'self'", "data:"])
        .report_uri("/_csp");

    let mut headers: Vec<(String, String)> = Vec::new();
    let (name, value) = CspHeader::new(policy).to_pair();
    headers.push((name.to_string(), value));

    assert_eq!(
        headers,
        vec![(
            "Content-Security-Policy".to_string(),
            "default-src 'self' static.example.com; img-src 'self' data:; report-uri /_csp"
                .to_string()
        )]
    );
}

#[test]
fn test_report_only_rollout() {
    // Same policy under both headers while migrating
    let policy = CspConfig::strict().script_src(["'self'", "'nonce-r4nd0m'"]);

    let enforced = CspHeader::new(CspConfig::strict());
    let trial = CspHeader::new(policy).report_only(true);

    assert_eq!(enforced.name(), CONTENT_SECURITY_POLICY);
    assert_eq!(trial.name(), CONTENT_SECURITY_POLICY_REPORT_ONLY);
    assert!(trial.value().contains("script-src 'self' 'nonce-r4nd0m'"));
    assert!(!enforced.value().contains("script-src"));
}

// =============================================================================
// Receiving reports
// =============================================================================

#[test]
fn test_receive_violation_report() {
    let body = serde_json::json!({
        "csp-report": {
            "document-uri": "https://example.com/",
            "violated-directive": "img-src",
            "blocked-uri": "https://tracker.example.net",
            "disposition": "enforce",
            "status-code": 200
        }
    });

    let report = ViolationReport::from_json(body.to_string().as_bytes()).unwrap();
    assert_eq!(report.blocked_uri, "https://tracker.example.net");
    assert_eq!(report.violated_directive.parse::<Directive>().unwrap(), Directive::ImgSrc);
}

// =============================================================================
// Logging controls
// =============================================================================

#[test]
fn test_logging_is_configurable_at_runtime() {
    let original = palisade::log::current_level();

    palisade::log::set_level(palisade::log::Level::Off);
    // rendering still works with logging silenced
    assert!(!CspConfig::strict().to_header_value().is_empty());

    palisade::log::set_level(original);
}
