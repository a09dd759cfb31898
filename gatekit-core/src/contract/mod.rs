//! Contract/1.0 — the capability contract set
//!
//! The contract set is the fixed catalogue of capability keys and the
//! input/output shape each implementation must satisfy:
//!
//! - [`CapabilityKey`] — the closed set of colon-namespaced keys
//! - Operation traits ([`LoginOperation`] etc.) — the per-key contracts
//! - [`AuthFailure`] — the failure shape every implementation translates
//!   its backend errors into
//! - [`Feature`] — a key tagged together with an implementation of the
//!   matching contract
//!
//! Contracts belong to the set, not to any provider: a consumer sees the
//! same shapes whichever backend is active.

mod feature;
mod key;
mod ops;

pub use feature::Feature;
pub use key::{CapabilityKey, Category};
pub use ops::{
    AuthFailure, AuthSession, ErrorTranslator, FailureKind, IdentityCredentials, LoginOperation,
    LogoutOperation, NewIdentity, OpResult, PasswordResetOperation, ReauthenticateOperation,
    RegisterOperation,
};

/// Contract set version
pub const VERSION: &str = "1.0";
