//! Error types for registry and resolution operations
//!
//! This module covers the *configuration* error surface of the registry:
//! unknown providers, unknown capability keys, and capabilities a provider
//! simply does not implement. Failures produced by the capability
//! implementations themselves (SDK errors, network errors) are not part of
//! this taxonomy — each implementation translates those into the contract's
//! [`AuthFailure`](crate::contract::AuthFailure) shape before they reach a
//! consumer.
//!
//! # Error Codes
//!
//! Each variant has a unique, stable error code (e.g. `UNKNOWN_PROVIDER`)
//! for logging, aggregation, and client-side handling.
//!
//! # Example
//!
//! ```rust
//! use gatekit_core::error::AuthError;
//!
//! fn handle_error(err: AuthError) {
//!     if err.is_missing_capability() {
//!         // Expected for optional capabilities — the provider just
//!         // doesn't offer this operation.
//!         return;
//!     }
//!     if err.is_configuration() {
//!         // Bootstrap bug: surface loudly, never mask as a user error.
//!         panic!("auth misconfiguration: {err}");
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contract::CapabilityKey;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Bootstrap/configuration bug — must fail loudly and early
    Configuration,
    /// Provider is installed but does not offer the capability
    Unsupported,
}

/// Errors raised by the registry and resolver
///
/// All variants carry enough context to point the developer at the
/// misconfigured provider or capability key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Resolution or `set_default` referenced a provider id that was never
    /// installed
    #[error("Unknown provider: '{provider_id}'. Install it with Registry::install() before resolving against it.")]
    UnknownProvider { provider_id: String },

    /// Resolution was attempted with no explicit provider, no scoped
    /// override, and no recorded default
    #[error("No default provider set. Call Registry::set_default() during bootstrap or pass an explicit provider id.")]
    DefaultProviderUnset,

    /// A capability key string referenced a key outside the contract set
    #[error("Unknown capability key: '{capability}'. Known keys are listed by CapabilityKey::ALL.")]
    UnknownCapability { capability: String },

    /// The provider is installed but has no binding for the requested
    /// capability
    ///
    /// This is the expected outcome when a provider does not implement an
    /// optional capability (e.g. no reauthentication support). Branch on
    /// [`AuthError::is_missing_capability`], not on the message text.
    #[error("Provider '{provider_id}' has no binding for '{capability}'.")]
    MissingCapability {
        provider_id: String,
        capability: CapabilityKey,
    },
}

impl AuthError {
    /// Returns true if this error indicates a bootstrap/configuration bug
    ///
    /// Configuration errors should surface to the application developer and
    /// never be masked as runtime or user-facing failures.
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// Returns true if the target provider simply lacks the capability
    ///
    /// Callers offering optional capabilities (reauthentication, password
    /// reset) branch on this to degrade gracefully.
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, AuthError::MissingCapability { .. })
    }

    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuthError::UnknownProvider { .. }
            | AuthError::DefaultProviderUnset
            | AuthError::UnknownCapability { .. } => ErrorCategory::Configuration,
            AuthError::MissingCapability { .. } => ErrorCategory::Unsupported,
        }
    }

    /// Returns the stable error code for this error
    ///
    /// Codes are uppercase, underscore-separated identifiers that remain
    /// stable across versions.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::UnknownProvider { .. } => "UNKNOWN_PROVIDER",
            AuthError::DefaultProviderUnset => "DEFAULT_PROVIDER_UNSET",
            AuthError::UnknownCapability { .. } => "UNKNOWN_CAPABILITY",
            AuthError::MissingCapability { .. } => "MISSING_CAPABILITY",
        }
    }

    /// Converts this error to a JSON-serializable response object
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                category: self.category(),
            },
        }
    }
}

/// JSON-serializable error response for host surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail for JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g. "UNKNOWN_PROVIDER")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category
    pub category: ErrorCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            AuthError::UnknownProvider {
                provider_id: "fb".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            AuthError::DefaultProviderUnset.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            AuthError::MissingCapability {
                provider_id: "fb".to_string(),
                capability: CapabilityKey::Reauthenticate,
            }
            .category(),
            ErrorCategory::Unsupported
        );
    }

    #[test]
    fn test_missing_capability_is_branchable_by_kind() {
        let missing = AuthError::MissingCapability {
            provider_id: "fb".to_string(),
            capability: CapabilityKey::Reauthenticate,
        };
        assert!(missing.is_missing_capability());
        assert!(!missing.is_configuration());

        let unknown = AuthError::UnknownProvider {
            provider_id: "fb".to_string(),
        };
        assert!(!unknown.is_missing_capability());
        assert!(unknown.is_configuration());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::UnknownCapability {
                capability: "identityPassword:loign".to_string()
            }
            .error_code(),
            "UNKNOWN_CAPABILITY"
        );
        assert_eq!(
            AuthError::DefaultProviderUnset.error_code(),
            "DEFAULT_PROVIDER_UNSET"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let err = AuthError::UnknownProvider {
            provider_id: "supabase".to_string(),
        };
        let response = err.to_error_response();

        let json = serde_json::to_string_pretty(&response).unwrap();
        assert!(json.contains("UNKNOWN_PROVIDER"));
        assert!(json.contains("supabase"));
        assert!(json.contains("configuration"));

        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.error.code, "UNKNOWN_PROVIDER");
    }

    #[test]
    fn test_error_messages_are_helpful() {
        let err = AuthError::UnknownProvider {
            provider_id: "auth0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("auth0"));
        assert!(msg.contains("Registry::install"));
    }
}
