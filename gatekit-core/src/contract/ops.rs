//! Operation contracts and their input/output shapes
//!
//! Every implementation of a capability key must satisfy the corresponding
//! trait here, whatever backend it talks to. The core never inspects an
//! implementation — it only hands the trait object to the consumer, who
//! invokes it directly. All backend I/O, error translation, retries, and
//! cancellation live behind these traits.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type for invoking a capability implementation
pub type OpResult<T> = std::result::Result<T, AuthFailure>;

/// Identity + password credentials for login and reauthentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityCredentials {
    /// Identity handle — email, username, phone, whatever the backend keys on
    pub identity: String,
    /// Plain password; handed to the implementation, never stored by the core
    pub password: String,
}

/// Input shape for registering a new identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIdentity {
    pub identity: String,
    pub password: String,
    /// Backend-specific profile attributes, passed through opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

/// A successful authentication result
///
/// Deliberately minimal: the core is not a session store. Implementations
/// that manage richer session state keep it on their side of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Backend-issued session identifier
    pub session_id: String,
    /// Backend-issued user identifier
    pub user_id: String,
    /// When the backend issued the session
    pub issued_at: DateTime<Utc>,
}

/// Kind of contract-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input was rejected; per-field messages are in `fields`
    Validation,
    /// The request itself failed (network, backend outage, rejection)
    Request,
}

/// The contract failure shape
///
/// Implementations catch their SDK's native errors and translate them into
/// this shape before it reaches the consumer, so calling code can branch on
/// validation-vs-request without knowing which backend is active.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[error("{kind:?} failure: {message}")]
pub struct AuthFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Per-field validation messages, keyed by input field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl AuthFailure {
    /// A validation failure with no field detail yet
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// A general request failure
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Request,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Attach a per-field message
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.fields.insert(field.into(), message.into());
        self
    }

    /// Returns true for input-shaped failures the user can correct
    pub fn is_validation(&self) -> bool {
        self.kind == FailureKind::Validation
    }
}

/// Contract for `identityPassword:login`
#[async_trait::async_trait]
pub trait LoginOperation: Send + Sync {
    async fn login(&self, credentials: IdentityCredentials) -> OpResult<AuthSession>;
}

/// Contract for `identityPassword:register`
#[async_trait::async_trait]
pub trait RegisterOperation: Send + Sync {
    async fn register(&self, identity: NewIdentity) -> OpResult<AuthSession>;
}

/// Contract for `identityPassword:logout`
#[async_trait::async_trait]
pub trait LogoutOperation: Send + Sync {
    async fn logout(&self) -> OpResult<()>;
}

/// Contract for `identityPassword:reauthenticate`
///
/// Optional by contract: providers without a reauthentication flow simply
/// leave the key unbound, and resolution reports it as missing.
#[async_trait::async_trait]
pub trait ReauthenticateOperation: Send + Sync {
    async fn reauthenticate(&self, password: String) -> OpResult<AuthSession>;
}

/// Contract for `identityPassword:passwordReset`
#[async_trait::async_trait]
pub trait PasswordResetOperation: Send + Sync {
    async fn request_reset(&self, identity: String) -> OpResult<()>;
}

/// Contract for `errorHandler`
///
/// Pure translation from a backend's raw error value into the contract
/// failure shape; synchronous by design.
pub trait ErrorTranslator: Send + Sync {
    fn translate(&self, raw: &Value) -> AuthFailure;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_builders() {
        let failure = AuthFailure::validation("invalid input")
            .with_field("identity", "not an email")
            .with_field("password", "too short");

        assert!(failure.is_validation());
        assert_eq!(failure.fields.len(), 2);
        assert_eq!(failure.fields["password"], "too short");

        let failure = AuthFailure::request("backend unreachable");
        assert!(!failure.is_validation());
        assert!(failure.fields.is_empty());
    }

    #[test]
    fn test_failure_serialization() {
        let failure = AuthFailure::validation("bad email").with_field("identity", "bad email");
        let json = serde_json::to_string(&failure).unwrap();
        assert!(json.contains("validation"));
        assert!(json.contains("identity"));

        let parsed: AuthFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, FailureKind::Validation);

        // fields is optional on the wire
        let parsed: AuthFailure =
            serde_json::from_str(r#"{"kind":"request","message":"timeout"}"#).unwrap();
        assert_eq!(parsed.kind, FailureKind::Request);
        assert!(parsed.fields.is_empty());
    }

    #[test]
    fn test_session_shape_round_trips() {
        let session = AuthSession {
            session_id: "sess-1".to_string(),
            user_id: "user-1".to_string(),
            issued_at: Utc::now(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let parsed: AuthSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.user_id, "user-1");
    }
}
