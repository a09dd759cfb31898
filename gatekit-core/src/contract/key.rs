//! Capability key catalogue

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Category half of a capability key's `category:operation` namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Identity + password authentication operations
    IdentityPassword,
    /// Capabilities shared across authentication methods
    Shared,
}

impl Category {
    /// Wire/name prefix of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::IdentityPassword => "identityPassword",
            Category::Shared => "shared",
        }
    }
}

/// A capability key — one unit of authentication behavior
///
/// Keys form a closed, statically-known set. The string form is
/// colon-namespaced (`"identityPassword:login"`); the uncategorised
/// `errorHandler` key belongs to the shared category and carries no prefix,
/// matching how host configuration files spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CapabilityKey {
    /// Log in with identity + password
    Login,
    /// Register a new identity
    Register,
    /// End the current session on the backend
    Logout,
    /// Re-verify the current identity's password
    Reauthenticate,
    /// Request a password reset for an identity
    PasswordReset,
    /// Translate raw backend errors into the contract failure shape
    ErrorHandler,
}

impl CapabilityKey {
    /// Every key in the contract set, in a stable order
    pub const ALL: [CapabilityKey; 6] = [
        CapabilityKey::Login,
        CapabilityKey::Register,
        CapabilityKey::Logout,
        CapabilityKey::Reauthenticate,
        CapabilityKey::PasswordReset,
        CapabilityKey::ErrorHandler,
    ];

    /// The category this key belongs to
    pub fn category(&self) -> Category {
        match self {
            CapabilityKey::Login
            | CapabilityKey::Register
            | CapabilityKey::Logout
            | CapabilityKey::Reauthenticate
            | CapabilityKey::PasswordReset => Category::IdentityPassword,
            CapabilityKey::ErrorHandler => Category::Shared,
        }
    }

    /// The operation half of the key
    pub fn operation(&self) -> &'static str {
        match self {
            CapabilityKey::Login => "login",
            CapabilityKey::Register => "register",
            CapabilityKey::Logout => "logout",
            CapabilityKey::Reauthenticate => "reauthenticate",
            CapabilityKey::PasswordReset => "passwordReset",
            CapabilityKey::ErrorHandler => "errorHandler",
        }
    }

    /// Full namespaced string form
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKey::Login => "identityPassword:login",
            CapabilityKey::Register => "identityPassword:register",
            CapabilityKey::Logout => "identityPassword:logout",
            CapabilityKey::Reauthenticate => "identityPassword:reauthenticate",
            CapabilityKey::PasswordReset => "identityPassword:passwordReset",
            CapabilityKey::ErrorHandler => "errorHandler",
        }
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityKey {
    type Err = AuthError;

    /// Parse the namespaced string form
    ///
    /// Unknown strings fail with [`AuthError::UnknownCapability`] so typos
    /// in bootstrap configuration are caught at install time, not at first
    /// use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CapabilityKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| AuthError::UnknownCapability {
                capability: s.to_string(),
            })
    }
}

impl TryFrom<String> for CapabilityKey {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CapabilityKey> for String {
    fn from(key: CapabilityKey) -> Self {
        key.as_str().to_string()
    }
}
