// Palisade - typed Content-Security-Policy headers
//
// Facade over the member crates: policy rendering and report types from
// `palisade-csp`, logging controls from `palisade-log`.

pub use palisade_csp::*;

pub use palisade_csp as csp;
pub use palisade_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CONTENT_SECURITY_POLICY,
        CONTENT_SECURITY_POLICY_REPORT_ONLY,
        CspConfig,
        CspError,
        CspHeader,
        Directive,
        ReferrerPolicy,
        ReportEnvelope,
        RequireSriFor,
        RequireTrustedTypesFor,
        Sandbox,
        ViolationReport,
        load_policy,
    };
}
