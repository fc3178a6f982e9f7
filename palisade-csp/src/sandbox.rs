//! Sandbox
//!
//! Keywords for the `sandbox` directive. An empty sandbox applies every
//! restriction; each keyword lifts one of them.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Value of the `sandbox` directive
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sandbox {
    /// Downloads may start without a user gesture
    AllowDownloadsWithoutUserActivation,
    /// Forms may be submitted
    AllowForms,
    /// Modal windows may be opened
    AllowModals,
    /// The page may lock the screen orientation
    AllowOrientationLock,
    /// The Pointer Lock API is available
    AllowPointerLock,
    /// `window.open`, `target="_blank"` and friends are allowed
    AllowPopups,
    /// Popups open without inheriting the sandbox flags
    AllowPopupsToEscapeSandbox,
    /// Embedders control whether a presentation session can start
    AllowPresentation,
    /// Content keeps its real origin instead of an opaque one
    AllowSameOrigin,
    /// Scripts may run (popups still need `allow-popups`)
    AllowScripts,
    /// Storage Access API requests are allowed after a user gesture
    AllowStorageAccessByUserActivation,
    /// The top-level browsing context may be navigated
    AllowTopNavigation,
    /// Top-level navigation, but only from a user gesture
    AllowTopNavigationByUserActivation,
    /// Any other keyword, rendered verbatim
    Custom(String),
}

impl Sandbox {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AllowDownloadsWithoutUserActivation => "allow-downloads-without-user-activation",
            Self::AllowForms => "allow-forms",
            Self::AllowModals => "allow-modals",
            Self::AllowOrientationLock => "allow-orientation-lock",
            Self::AllowPointerLock => "allow-pointer-lock",
            Self::AllowPopups => "allow-popups",
            Self::AllowPopupsToEscapeSandbox => "allow-popups-to-escape-sandbox",
            Self::AllowPresentation => "allow-presentation",
            Self::AllowSameOrigin => "allow-same-origin",
            Self::AllowScripts => "allow-scripts",
            Self::AllowStorageAccessByUserActivation => "allow-storage-access-by-user-activation",
            Self::AllowTopNavigation => "allow-top-navigation",
            Self::AllowTopNavigationByUserActivation => "allow-top-navigation-by-user-activation",
            Self::Custom(value) => value,
        }
    }
}

// Compared by keyword, so `Custom` holding a known keyword equals the named variant.
impl PartialEq for Sandbox {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Sandbox {}

impl Hash for Sandbox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl AsRef<str> for Sandbox {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Sandbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sandbox {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Sandbox {
    fn from(value: &str) -> Self {
        match value {
            "allow-downloads-without-user-activation" => Self::AllowDownloadsWithoutUserActivation,
            "allow-forms" => Self::AllowForms,
            "allow-modals" => Self::AllowModals,
            "allow-orientation-lock" => Self::AllowOrientationLock,
            "allow-pointer-lock" => Self::AllowPointerLock,
            "allow-popups" => Self::AllowPopups,
            "allow-popups-to-escape-sandbox" => Self::AllowPopupsToEscapeSandbox,
            "allow-presentation" => Self::AllowPresentation,
            "allow-same-origin" => Self::AllowSameOrigin,
            "allow-scripts" => Self::AllowScripts,
            "allow-storage-access-by-user-activation" => Self::AllowStorageAccessByUserActivation,
            "allow-top-navigation" => Self::AllowTopNavigation,
            "allow-top-navigation-by-user-activation" => Self::AllowTopNavigationByUserActivation,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Sandbox {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Sandbox> for String {
    fn from(value: Sandbox) -> Self {
        match value {
            Sandbox::Custom(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
