//! Content Security Policy (CSP) configuration
//!
//! A [`CspConfig`] holds one slot per directive. Rendering walks the slots in
//! the fixed order of [`Directive::ALL`] and emits only the populated ones:
//!
//! - source lists as `name v1 v2 ...` when non-empty, order and duplicates kept
//! - flags as the bare `name` when `true`
//! - scalars as `name value` when set to a non-empty value
//!
//! Fragments are joined with `"; "`. An empty configuration renders `""`.

use crate::directive::{Directive, DirectiveKind};
use crate::referrer::ReferrerPolicy;
use crate::require::{RequireSriFor, RequireTrustedTypesFor};
use crate::sandbox::Sandbox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content Security Policy configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CspConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub base_uri: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub block_all_mixed_content: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connect_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub font_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form_action: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frame_ancestors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frame_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub img_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub manifest_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigate_to: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugin_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefetch_src: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<ReferrerPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_uri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub require_sri_for: Vec<RequireSriFor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub require_trusted_types_for: Vec<RequireTrustedTypesFor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<Sandbox>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub script_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub script_src_attr: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub script_src_elem: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_src: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_src_attr: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_src_elem: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trusted_types: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub upgrade_insecure_requests: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub worker_src: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn collect<I, S, T>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    S: Into<T>,
{
    values.into_iter().map(Into::into).collect()
}

macro_rules! source_list_setters {
    ($($(#[$doc:meta])* $field:ident;)+) => {$(
        $(#[$doc])*
        pub fn $field<I, S>(mut self, sources: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.$field = collect(sources);
            self
        }
    )+};
}

impl CspConfig {
    /// Create an empty configuration. It renders to `""`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Conservative starting point: same-origin resources only, no plugins,
    /// no framing, and insecure requests upgraded.
    pub fn strict() -> Self {
        Self::new()
            .base_uri(["'self'"])
            .default_src(["'self'"])
            .frame_ancestors(["'none'"])
            .object_src(["'none'"])
            .upgrade_insecure_requests(true)
    }

    source_list_setters! {
        /// Set base-uri directive
        base_uri;
        /// Set child-src directive
        child_src;
        /// Set connect-src directive
        connect_src;
        /// Set default-src directive
        default_src;
        /// Set font-src directive
        font_src;
        /// Set form-action directive
        form_action;
        /// Set frame-ancestors directive
        frame_ancestors;
        /// Set frame-src directive
        frame_src;
        /// Set img-src directive
        img_src;
        /// Set manifest-src directive
        manifest_src;
        /// Set media-src directive
        media_src;
        /// Set navigate-to directive
        navigate_to;
        /// Set object-src directive
        object_src;
        /// Set plugin-types directive (MIME types rather than sources)
        plugin_types;
        /// Set prefetch-src directive
        prefetch_src;
        /// Set script-src directive
        script_src;
        /// Set script-src-attr directive
        script_src_attr;
        /// Set script-src-elem directive
        script_src_elem;
        /// Set style-src directive
        style_src;
        /// Set style-src-attr directive
        style_src_attr;
        /// Set style-src-elem directive
        style_src_elem;
        /// Set trusted-types directive (policy names)
        trusted_types;
        /// Set worker-src directive
        worker_src;
    }

    /// Enable block-all-mixed-content
    pub fn block_all_mixed_content(mut self, enabled: bool) -> Self {
        self.block_all_mixed_content = enabled;
        self
    }

    /// Enable upgrade-insecure-requests
    pub fn upgrade_insecure_requests(mut self, enabled: bool) -> Self {
        self.upgrade_insecure_requests = enabled;
        self
    }

    /// Set referrer directive
    pub fn referrer(mut self, policy: impl Into<ReferrerPolicy>) -> Self {
        self.referrer = Some(policy.into());
        self
    }

    /// Set report-to directive (a reporting endpoint group name)
    pub fn report_to(mut self, group: impl Into<String>) -> Self {
        self.report_to = Some(group.into());
        self
    }

    /// Set report-uri directive
    pub fn report_uri(mut self, uri: impl Into<String>) -> Self {
        self.report_uri = Some(uri.into());
        self
    }

    /// Set sandbox directive
    pub fn sandbox(mut self, sandbox: impl Into<Sandbox>) -> Self {
        self.sandbox = Some(sandbox.into());
        self
    }

    /// Set require-sri-for directive
    pub fn require_sri_for<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RequireSriFor>,
    {
        self.require_sri_for = collect(kinds);
        self
    }

    /// Set require-trusted-types-for directive
    pub fn require_trusted_types_for<I, S>(mut self, sinks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RequireTrustedTypesFor>,
    {
        self.require_trusted_types_for = collect(sinks);
        self
    }

    /// Rendered fragment for one directive, or `None` when the slot is empty.
    pub fn fragment(&self, directive: Directive) -> Option<String> {
        match directive {
            Directive::BaseUri => source_list(directive, &self.base_uri),
            Directive::BlockAllMixedContent => flag(directive, self.block_all_mixed_content),
            Directive::ChildSrc => source_list(directive, &self.child_src),
            Directive::ConnectSrc => source_list(directive, &self.connect_src),
            Directive::DefaultSrc => source_list(directive, &self.default_src),
            Directive::FontSrc => source_list(directive, &self.font_src),
            Directive::FormAction => source_list(directive, &self.form_action),
            Directive::FrameAncestors => source_list(directive, &self.frame_ancestors),
            Directive::FrameSrc => source_list(directive, &self.frame_src),
            Directive::ImgSrc => source_list(directive, &self.img_src),
            Directive::ManifestSrc => source_list(directive, &self.manifest_src),
            Directive::MediaSrc => source_list(directive, &self.media_src),
            Directive::NavigateTo => source_list(directive, &self.navigate_to),
            Directive::ObjectSrc => source_list(directive, &self.object_src),
            Directive::PluginTypes => source_list(directive, &self.plugin_types),
            Directive::PrefetchSrc => source_list(directive, &self.prefetch_src),
            Directive::Referrer => scalar(directive, self.referrer.as_ref()),
            Directive::ReportTo => scalar(directive, self.report_to.as_ref()),
            Directive::ReportUri => scalar(directive, self.report_uri.as_ref()),
            Directive::RequireSriFor => source_list(directive, &self.require_sri_for),
            Directive::RequireTrustedTypesFor => {
                source_list(directive, &self.require_trusted_types_for)
            }
            Directive::Sandbox => scalar(directive, self.sandbox.as_ref()),
            Directive::ScriptSrc => source_list(directive, &self.script_src),
            Directive::ScriptSrcAttr => source_list(directive, &self.script_src_attr),
            Directive::ScriptSrcElem => source_list(directive, &self.script_src_elem),
            Directive::StyleSrc => source_list(directive, &self.style_src),
            Directive::StyleSrcAttr => source_list(directive, &self.style_src_attr),
            Directive::StyleSrcElem => source_list(directive, &self.style_src_elem),
            Directive::TrustedTypes => source_list(directive, &self.trusted_types),
            Directive::UpgradeInsecureRequests => flag(directive, self.upgrade_insecure_requests),
            Directive::WorkerSrc => source_list(directive, &self.worker_src),
        }
    }

    /// Populated directives and their rendered fragments, in render order.
    pub fn directives(&self) -> impl Iterator<Item = (Directive, String)> + '_ {
        Directive::ALL
            .into_iter()
            .filter_map(move |directive| self.fragment(directive).map(|f| (directive, f)))
    }

    /// True when no directive would be rendered.
    pub fn is_empty(&self) -> bool {
        self.directives().next().is_none()
    }

    /// Convert to header value
    pub fn to_header_value(&self) -> String {
        let parts: Vec<String> = self.directives().map(|(_, fragment)| fragment).collect();

        palisade_log::trace!(
            target: "palisade::csp",
            "rendered {} directive(s) into policy",
            parts.len()
        );

        parts.join("; ")
    }
}

impl fmt::Display for CspConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_value())
    }
}

fn source_list<T: AsRef<str>>(directive: Directive, values: &[T]) -> Option<String> {
    debug_assert_eq!(directive.kind(), DirectiveKind::SourceList);

    if values.is_empty() {
        return None;
    }

    let mut fragment = String::from(directive.name());
    for value in values {
        fragment.push(' ');
        fragment.push_str(value.as_ref());
    }
    Some(fragment)
}

fn flag(directive: Directive, enabled: bool) -> Option<String> {
    debug_assert_eq!(directive.kind(), DirectiveKind::Flag);
    enabled.then(|| directive.name().to_string())
}

fn scalar<T: AsRef<str>>(directive: Directive, value: Option<&T>) -> Option<String> {
    debug_assert_eq!(directive.kind(), DirectiveKind::Scalar);

    match value.map(AsRef::as_ref) {
        Some(value) if !value.is_empty() => Some(format!("{} {}", directive.name(), value)),
        _ => None,
    }
}
