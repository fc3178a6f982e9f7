//! Directive table
//!
//! Every directive a [`CspConfig`](crate::CspConfig) can carry, in the order
//! they are rendered. The order is fixed so header values are reproducible
//! and comparable byte for byte.

use crate::error::CspError;
use std::fmt;
use std::str::FromStr;

/// How a directive's value is stored and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Ordered list of sources or keywords: `name v1 v2 ...`, omitted when empty
    SourceList,
    /// Bare directive name, present only when enabled
    Flag,
    /// Single value: `name value`, omitted when empty
    Scalar,
}

/// A Content-Security-Policy directive
///
/// Each variant is the directive whose wire name is the variant's name in
/// kebab-case (`ScriptSrcElem` is `script-src-elem`). [`Directive::name`]
/// returns that name and [`Directive::kind`] how its value is rendered;
/// variants are declared in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directive {
    BaseUri,
    BlockAllMixedContent,
    ChildSrc,
    ConnectSrc,
    DefaultSrc,
    FontSrc,
    FormAction,
    FrameAncestors,
    FrameSrc,
    ImgSrc,
    ManifestSrc,
    MediaSrc,
    NavigateTo,
    ObjectSrc,
    PluginTypes,
    PrefetchSrc,
    Referrer,
    ReportTo,
    ReportUri,
    RequireSriFor,
    RequireTrustedTypesFor,
    Sandbox,
    ScriptSrc,
    ScriptSrcAttr,
    ScriptSrcElem,
    StyleSrc,
    StyleSrcAttr,
    StyleSrcElem,
    TrustedTypes,
    UpgradeInsecureRequests,
    WorkerSrc,
}

// (directive, canonical name, kind) in render order
const TABLE: [(Directive, &str, DirectiveKind); 31] = [
    (Directive::BaseUri, "base-uri", DirectiveKind::SourceList),
    (Directive::BlockAllMixedContent, "block-all-mixed-content", DirectiveKind::Flag),
    (Directive::ChildSrc, "child-src", DirectiveKind::SourceList),
    (Directive::ConnectSrc, "connect-src", DirectiveKind::SourceList),
    (Directive::DefaultSrc, "default-src", DirectiveKind::SourceList),
    (Directive::FontSrc, "font-src", DirectiveKind::SourceList),
    (Directive::FormAction, "form-action", DirectiveKind::SourceList),
    (Directive::FrameAncestors, "frame-ancestors", DirectiveKind::SourceList),
    (Directive::FrameSrc, "frame-src", DirectiveKind::SourceList),
    (Directive::ImgSrc, "img-src", DirectiveKind::SourceList),
    (Directive::ManifestSrc, "manifest-src", DirectiveKind::SourceList),
    (Directive::MediaSrc, "media-src", DirectiveKind::SourceList),
    (Directive::NavigateTo, "navigate-to", DirectiveKind::SourceList),
    (Directive::ObjectSrc, "object-src", DirectiveKind::SourceList),
    (Directive::PluginTypes, "plugin-types", DirectiveKind::SourceList),
    (Directive::PrefetchSrc, "prefetch-src", DirectiveKind::SourceList),
    (Directive::Referrer, "referrer", DirectiveKind::Scalar),
    (Directive::ReportTo, "report-to", DirectiveKind::Scalar),
    (Directive::ReportUri, "report-uri", DirectiveKind::Scalar),
    (Directive::RequireSriFor, "require-sri-for", DirectiveKind::SourceList),
    (Directive::RequireTrustedTypesFor, "require-trusted-types-for", DirectiveKind::SourceList),
    (Directive::Sandbox, "sandbox", DirectiveKind::Scalar),
    (Directive::ScriptSrc, "script-src", DirectiveKind::SourceList),
    (Directive::ScriptSrcAttr, "script-src-attr", DirectiveKind::SourceList),
    (Directive::ScriptSrcElem, "script-src-elem", DirectiveKind::SourceList),
    (Directive::StyleSrc, "style-src", DirectiveKind::SourceList),
    (Directive::StyleSrcAttr, "style-src-attr", DirectiveKind::SourceList),
    (Directive::StyleSrcElem, "style-src-elem", DirectiveKind::SourceList),
    (Directive::TrustedTypes, "trusted-types", DirectiveKind::SourceList),
    (Directive::UpgradeInsecureRequests, "upgrade-insecure-requests", DirectiveKind::Flag),
    (Directive::WorkerSrc, "worker-src", DirectiveKind::SourceList),
];

impl Directive {
    /// All directives in render order.
    pub const ALL: [Directive; 31] = {
        let mut all = [Directive::BaseUri; 31];
        let mut i = 0;
        while i < TABLE.len() {
            all[i] = TABLE[i].0;
            i += 1;
        }
        all
    };

    /// Canonical kebab-case name, e.g. `default-src`.
    pub fn name(self) -> &'static str {
        TABLE[self as usize].1
    }

    pub fn kind(self) -> DirectiveKind {
        TABLE[self as usize].2
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Directive {
    type Err = CspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TABLE
            .iter()
            .find(|(_, name, _)| *name == s)
            .map(|(directive, _, _)| *directive)
            .ok_or_else(|| CspError::UnknownDirective(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_discriminants() {
        for (index, (directive, _, _)) in TABLE.iter().enumerate() {
            assert_eq!(*directive as usize, index);
        }
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        assert_eq!(Directive::ALL.first(), Some(&Directive::BaseUri));
        assert_eq!(Directive::ALL.last(), Some(&Directive::WorkerSrc));
        assert!(Directive::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_names_and_kinds() {
        assert_eq!(Directive::DefaultSrc.name(), "default-src");
        assert_eq!(Directive::DefaultSrc.kind(), DirectiveKind::SourceList);
        assert_eq!(Directive::UpgradeInsecureRequests.kind(), DirectiveKind::Flag);
        assert_eq!(Directive::Sandbox.kind(), DirectiveKind::Scalar);
        assert_eq!(Directive::RequireTrustedTypesFor.to_string(), "require-trusted-types-for");
    }

    #[test]
    fn test_name_is_kebab_case_variant() {
        for directive in Directive::ALL {
            let mut expected = String::new();
            for (i, c) in format!("{directive:?}").chars().enumerate() {
                if c.is_ascii_uppercase() {
                    if i > 0 {
                        expected.push('-');
                    }
                    expected.push(c.to_ascii_lowercase());
                } else {
                    expected.push(c);
                }
            }
            assert_eq!(directive.name(), expected);
        }
    }

    #[test]
    fn test_parse_directive_name() {
        for directive in Directive::ALL {
            assert_eq!(directive.name().parse::<Directive>().unwrap(), directive);
        }

        let err = "script-source".parse::<Directive>().unwrap_err();
        assert!(matches!(err, CspError::UnknownDirective(ref name) if name == "script-source"));
    }
}
