// Policy file loaders

use crate::error::{CspError, Result};
use crate::policy::CspConfig;
use std::fs;
use std::path::Path;

/// Supported policy file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    Json,
    Toml,
}

impl PolicyFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(PolicyFormat::Json),
            "toml" => Some(PolicyFormat::Toml),
            _ => None,
        }
    }
}

/// Reads a [`CspConfig`] from JSON or TOML.
///
/// Keys are directive names (`default-src`, `upgrade-insecure-requests`, ...).
/// Unknown keys are an error so a typo never silently drops a directive.
pub struct PolicyLoader {
    format: PolicyFormat,
}

impl PolicyLoader {
    pub fn new(format: PolicyFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CspError::Load(format!("No file extension: {}", path.display())))?;

        let format = PolicyFormat::from_extension(ext)
            .ok_or_else(|| CspError::Load(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    /// Load a policy from file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<CspConfig> {
        let path = path.as_ref();
        palisade_log::debug!(target: "palisade::csp::loader", "reading policy from {}", path.display());

        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Parse a policy from string
    pub fn parse(&self, content: &str) -> Result<CspConfig> {
        let config: CspConfig = match self.format {
            PolicyFormat::Json => serde_json::from_str(content)
                .map_err(|e| CspError::Parse(format!("JSON parse error: {}", e)))?,
            PolicyFormat::Toml => toml::from_str(content)
                .map_err(|e| CspError::Parse(format!("TOML parse error: {}", e)))?,
        };

        palisade_log::debug!(
            target: "palisade::csp::loader",
            "loaded policy with {} directive(s)",
            config.directives().count()
        );

        Ok(config)
    }
}

/// Load a policy file, picking the format from its extension.
pub fn load_policy(path: impl AsRef<Path>) -> Result<CspConfig> {
    let path = path.as_ref();
    PolicyLoader::auto(path)?.load_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReferrerPolicy, Sandbox};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(PolicyFormat::from_extension("JSON"), Some(PolicyFormat::Json));
        assert_eq!(PolicyFormat::from_extension("toml"), Some(PolicyFormat::Toml));
        assert_eq!(PolicyFormat::from_extension("yaml"), None);
    }

    #[test]
    fn test_parse_toml() {
        let loader = PolicyLoader::new(PolicyFormat::Toml);
        let toml = r#"
            default-src = ["'self'"]
            img-src = ["'self'", "data:"]
            sandbox = "allow-forms"
            referrer = "no-referrer"
            upgrade-insecure-requests = true
        "#;

        let config = loader.parse(toml).unwrap();
        assert_eq!(config.img_src, vec!["'self'", "data:"]);
        assert_eq!(config.sandbox, Some(Sandbox::AllowForms));
        assert_eq!(config.referrer, Some(ReferrerPolicy::NoReferrer));
        assert!(config.upgrade_insecure_requests);
    }

    #[test]
    fn test_parse_json() {
        let loader = PolicyLoader::new(PolicyFormat::Json);
        let config = loader
            .parse(r#"{"script-src": ["'self'", "cdn.example.com"], "report-uri": "/csp"}"#)
            .unwrap();

        assert_eq!(
            config.to_header_value(),
            "report-uri /csp; script-src 'self' cdn.example.com"
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let loader = PolicyLoader::new(PolicyFormat::Json);
        let err = loader.parse(r#"{"script-source": ["'self'"]}"#).unwrap_err();

        match err {
            CspError::Parse(message) => assert!(message.contains("script-source")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_auto_requires_known_extension() {
        assert!(matches!(PolicyLoader::auto("policy"), Err(CspError::Load(_))));
        assert!(matches!(PolicyLoader::auto("policy.ini"), Err(CspError::Load(_))));
        assert!(PolicyLoader::auto("policy.toml").is_ok());
    }
}
