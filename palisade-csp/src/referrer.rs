//! Referrer
//!
//! Values for the legacy `referrer` directive, which controls how much
//! referrer information the document sends with its requests.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Value of the `referrer` directive
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReferrerPolicy {
    /// Omit the Referer header entirely
    NoReferrer,
    /// Send the referrer to equally secure destinations only (HTTPS to HTTPS)
    NoneWhenDowngrade,
    /// Send only the document origin
    Origin,
    /// Full URL for same-origin requests, origin only otherwise
    OriginWhenCrossOrigin,
    /// Always send the full URL, even to insecure origins
    UnsafeUrl,
    /// Any other value, rendered verbatim
    Custom(String),
}

impl ReferrerPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoReferrer => "no-referrer",
            Self::NoneWhenDowngrade => "none-when-downgrade",
            Self::Origin => "origin",
            Self::OriginWhenCrossOrigin => "origin-when-cross-origin",
            Self::UnsafeUrl => "unsafe-url",
            Self::Custom(value) => value,
        }
    }
}

// Compared by keyword, so `Custom` holding a known keyword equals the named variant.
impl PartialEq for ReferrerPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ReferrerPolicy {}

impl Hash for ReferrerPolicy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl AsRef<str> for ReferrerPolicy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ReferrerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferrerPolicy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for ReferrerPolicy {
    fn from(value: &str) -> Self {
        match value {
            "no-referrer" => Self::NoReferrer,
            "none-when-downgrade" => Self::NoneWhenDowngrade,
            "origin" => Self::Origin,
            "origin-when-cross-origin" => Self::OriginWhenCrossOrigin,
            "unsafe-url" => Self::UnsafeUrl,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ReferrerPolicy {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ReferrerPolicy> for String {
    fn from(value: ReferrerPolicy) -> Self {
        match value {
            ReferrerPolicy::Custom(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referrer_policy() {
        assert_eq!(ReferrerPolicy::NoReferrer.as_str(), "no-referrer");
        assert_eq!(
            ReferrerPolicy::OriginWhenCrossOrigin.as_str(),
            "origin-when-cross-origin"
        );
        assert_eq!(ReferrerPolicy::UnsafeUrl.to_string(), "unsafe-url");
    }

    #[test]
    fn test_known_values_parse_to_variants() {
        assert_eq!(ReferrerPolicy::from("origin"), ReferrerPolicy::Origin);
        assert_eq!(
            ReferrerPolicy::from("none-when-downgrade"),
            ReferrerPolicy::NoneWhenDowngrade
        );
    }

    #[test]
    fn test_unknown_value_is_kept_verbatim() {
        let policy = ReferrerPolicy::from("strict-origin");
        assert_eq!(policy, ReferrerPolicy::Custom("strict-origin".to_string()));
        assert_eq!(policy.as_str(), "strict-origin");
    }

    #[test]
    fn test_custom_known_keyword_equals_variant() {
        use std::collections::HashSet;

        let custom = ReferrerPolicy::Custom("no-referrer".to_string());
        assert_eq!(custom, ReferrerPolicy::NoReferrer);

        let set: HashSet<ReferrerPolicy> = [custom, ReferrerPolicy::NoReferrer].into();
        assert_eq!(set.len(), 1);
    }
}
