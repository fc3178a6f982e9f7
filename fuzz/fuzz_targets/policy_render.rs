//! Fuzz target for policy rendering.
//!
//! Builds policies from arbitrary directive values and checks the
//! structural guarantees of the rendered header value.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use palisade_csp::{CspConfig, Directive};

#[derive(Debug, Arbitrary)]
struct FuzzPolicy {
    default_src: Vec<String>,
    script_src: Vec<String>,
    worker_src: Vec<String>,
    sandbox: Option<String>,
    report_uri: Option<String>,
    upgrade_insecure_requests: bool,
    block_all_mixed_content: bool,
}

fuzz_target!(|data: FuzzPolicy| {
    let mut policy = CspConfig::new()
        .default_src(data.default_src)
        .script_src(data.script_src)
        .worker_src(data.worker_src)
        .upgrade_insecure_requests(data.upgrade_insecure_requests)
        .block_all_mixed_content(data.block_all_mixed_content);
    policy.sandbox = data.sandbox.map(Into::into);
    policy.report_uri = data.report_uri;

    let value = policy.to_header_value();

    // Rendering is deterministic
    assert_eq!(value, policy.clone().to_header_value());

    // Fragments appear in table order and match the joined value
    let fragments: Vec<(Directive, String)> = policy.directives().collect();
    assert!(fragments.windows(2).all(|w| w[0].0 < w[1].0));
    let joined: Vec<&str> = fragments.iter().map(|(_, f)| f.as_str()).collect();
    assert_eq!(value, joined.join("; "));

    if fragments.is_empty() {
        assert!(value.is_empty());
    }

    // Policies survive a trip through their serialized form
    if let Ok(json) = serde_json::to_string(&policy) {
        let decoded: CspConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.to_header_value(), value);
    }
});
