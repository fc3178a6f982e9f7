//! Values for `require-sri-for` and `require-trusted-types-for`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Resource type for which Subresource Integrity is required
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequireSriFor {
    Script,
    Style,
    Custom(String),
}

impl RequireSriFor {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
            Self::Custom(value) => value,
        }
    }
}

impl From<&str> for RequireSriFor {
    fn from(value: &str) -> Self {
        match value {
            "script" => Self::Script,
            "style" => Self::Style,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// Sink group for which Trusted Types are enforced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequireTrustedTypesFor {
    /// `'script'`, the only group defined so far (the quotes are part of the token)
    Script,
    Custom(String),
}

impl RequireTrustedTypesFor {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Script => "'script'",
            Self::Custom(value) => value,
        }
    }
}

impl From<&str> for RequireTrustedTypesFor {
    fn from(value: &str) -> Self {
        match value {
            "'script'" => Self::Script,
            other => Self::Custom(other.to_string()),
        }
    }
}

// Shared conversions; both types are keyword strings with a verbatim fallback.
// Equality and hashing go through the keyword, so `Custom("script")` equals `Script`.
macro_rules! keyword_conversions {
    ($($ty:ident),+) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                match value {
                    $ty::Custom(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }
    )+};
}

keyword_conversions!(RequireSriFor, RequireTrustedTypesFor);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_sri_for() {
        assert_eq!(RequireSriFor::Script.as_str(), "script");
        assert_eq!(RequireSriFor::from("style"), RequireSriFor::Style);
        assert_eq!(RequireSriFor::from("font").as_str(), "font");
    }

    #[test]
    fn test_trusted_types_keyword_is_quoted() {
        assert_eq!(RequireTrustedTypesFor::Script.to_string(), "'script'");
        assert_eq!(
            RequireTrustedTypesFor::from("'script'"),
            RequireTrustedTypesFor::Script
        );
        // the unquoted form is not the keyword
        assert_eq!(
            RequireTrustedTypesFor::from("script"),
            RequireTrustedTypesFor::Custom("script".to_string())
        );
    }

    #[test]
    fn test_custom_known_keyword_equals_variant() {
        use std::collections::HashSet;

        assert_eq!(RequireSriFor::Custom("style".to_string()), RequireSriFor::Style);
        assert_eq!(
            RequireTrustedTypesFor::Custom("'script'".to_string()),
            RequireTrustedTypesFor::Script
        );

        let set: HashSet<RequireSriFor> =
            [RequireSriFor::Script, RequireSriFor::Custom("script".to_string())].into();
        assert_eq!(set.len(), 1);
    }
}
