//! Fuzz target for violation report decoding.
//!
//! Report bodies come straight from browsers (or attackers), so decoding
//! must return an error instead of panicking on any input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use palisade_csp::{ReportEnvelope, ViolationReport};

fuzz_target!(|data: &[u8]| {
    if let Ok(report) = ViolationReport::from_json(data) {
        let body = serde_json::to_vec(&ReportEnvelope::from(report.clone())).unwrap();
        assert_eq!(ViolationReport::from_json(&body).unwrap(), report);
    }
});
