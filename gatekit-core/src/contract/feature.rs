//! Tagged capability bindings

use std::fmt;
use std::sync::Arc;

use super::key::CapabilityKey;
use super::ops::{
    ErrorTranslator, LoginOperation, LogoutOperation, PasswordResetOperation,
    ReauthenticateOperation, RegisterOperation,
};

/// A capability key bound to an implementation of the matching contract
///
/// The tagging makes a wrong-shape binding unrepresentable: a
/// `Feature::Login` can only ever hold a [`LoginOperation`]. Implementations
/// sit behind `Arc`, so cloning a feature (which resolution does) hands out
/// the same implementation, not a copy — observable via
/// [`Feature::same_binding`].
#[derive(Clone)]
pub enum Feature {
    Login(Arc<dyn LoginOperation>),
    Register(Arc<dyn RegisterOperation>),
    Logout(Arc<dyn LogoutOperation>),
    Reauthenticate(Arc<dyn ReauthenticateOperation>),
    PasswordReset(Arc<dyn PasswordResetOperation>),
    ErrorHandler(Arc<dyn ErrorTranslator>),
}

impl Feature {
    /// The capability key this binding implements
    pub fn key(&self) -> CapabilityKey {
        match self {
            Feature::Login(_) => CapabilityKey::Login,
            Feature::Register(_) => CapabilityKey::Register,
            Feature::Logout(_) => CapabilityKey::Logout,
            Feature::Reauthenticate(_) => CapabilityKey::Reauthenticate,
            Feature::PasswordReset(_) => CapabilityKey::PasswordReset,
            Feature::ErrorHandler(_) => CapabilityKey::ErrorHandler,
        }
    }

    /// True when both features hold the exact same implementation
    pub fn same_binding(&self, other: &Feature) -> bool {
        match (self, other) {
            (Feature::Login(a), Feature::Login(b)) => Arc::ptr_eq(a, b),
            (Feature::Register(a), Feature::Register(b)) => Arc::ptr_eq(a, b),
            (Feature::Logout(a), Feature::Logout(b)) => Arc::ptr_eq(a, b),
            (Feature::Reauthenticate(a), Feature::Reauthenticate(b)) => Arc::ptr_eq(a, b),
            (Feature::PasswordReset(a), Feature::PasswordReset(b)) => Arc::ptr_eq(a, b),
            (Feature::ErrorHandler(a), Feature::ErrorHandler(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The login implementation, if this is a login binding
    pub fn into_login(self) -> Option<Arc<dyn LoginOperation>> {
        match self {
            Feature::Login(op) => Some(op),
            _ => None,
        }
    }

    /// The register implementation, if this is a register binding
    pub fn into_register(self) -> Option<Arc<dyn RegisterOperation>> {
        match self {
            Feature::Register(op) => Some(op),
            _ => None,
        }
    }

    /// The logout implementation, if this is a logout binding
    pub fn into_logout(self) -> Option<Arc<dyn LogoutOperation>> {
        match self {
            Feature::Logout(op) => Some(op),
            _ => None,
        }
    }

    /// The reauthentication implementation, if this is one
    pub fn into_reauthenticate(self) -> Option<Arc<dyn ReauthenticateOperation>> {
        match self {
            Feature::Reauthenticate(op) => Some(op),
            _ => None,
        }
    }

    /// The password-reset implementation, if this is one
    pub fn into_password_reset(self) -> Option<Arc<dyn PasswordResetOperation>> {
        match self {
            Feature::PasswordReset(op) => Some(op),
            _ => None,
        }
    }

    /// The error translator, if this is an error-handler binding
    pub fn into_error_handler(self) -> Option<Arc<dyn ErrorTranslator>> {
        match self {
            Feature::ErrorHandler(op) => Some(op),
            _ => None,
        }
    }
}

impl fmt::Debug for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Feature").field(&self.key()).finish()
    }
}
