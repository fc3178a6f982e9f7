//! # Palisade CSP
//!
//! Builds `Content-Security-Policy` header values from a typed configuration
//! and defines the shape of the violation reports browsers send back.
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade_csp::{CspConfig, CspHeader, Sandbox};
//!
//! let policy = CspConfig::new()
//!     .default_src(["'self'", "static.example.com"])
//!     .sandbox(Sandbox::AllowScripts)
//!     .upgrade_insecure_requests(true);
//!
//! assert_eq!(
//!     policy.to_header_value(),
//!     "default-src 'self' static.example.com; sandbox allow-scripts; upgrade-insecure-requests"
//! );
//!
//! let (name, value) = CspHeader::new(policy).report_only(true).to_pair();
//! assert_eq!(name, "Content-Security-Policy-Report-Only");
//! # let _ = value;
//! ```
//!
//! ## Rendering rules
//!
//! Directives are rendered in a fixed order (see [`Directive::ALL`]), never
//! in the order the builder was called. Source lists keep their order and
//! duplicates. Empty lists, `false` flags and empty scalars are omitted, and
//! a configuration with nothing set renders as the empty string. Values are
//! not validated.
//!
//! ## Violation reports
//!
//! ```rust
//! use palisade_csp::ViolationReport;
//!
//! let body = br#"{"csp-report": {"violated-directive": "img-src", "status-code": 200}}"#;
//! let report = ViolationReport::from_json(body).unwrap();
//! assert_eq!(report.violated_directive, "img-src");
//! ```
//!
//! ## Policy files
//!
//! ```rust,no_run
//! let policy = palisade_csp::load_policy("csp.toml").unwrap();
//! println!("{}", policy);
//! ```

pub mod directive;
pub mod error;
pub mod header;
pub mod loader;
pub mod policy;
pub mod referrer;
pub mod report;
pub mod require;
pub mod sandbox;

pub use directive::{Directive, DirectiveKind};
pub use error::{CspError, Result};
pub use header::{CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY_REPORT_ONLY, CspHeader};
pub use loader::{PolicyFormat, PolicyLoader, load_policy};
pub use policy::CspConfig;
pub use referrer::ReferrerPolicy;
pub use report::{ReportEnvelope, ViolationReport};
pub use require::{RequireSriFor, RequireTrustedTypesFor};
pub use sandbox::Sandbox;
