//! Consumption surface
//!
//! Ordinary application code goes through these zero-argument accessors;
//! each one resolves against the process-wide registry at call time, so the
//! caller's shape is identical whichever provider is active. Provider swaps
//! happen via [`crate::scope::with_provider`] or by naming the provider on
//! the registry's `*_with` variants — never by changing the call site.

use std::sync::Arc;
use std::sync::OnceLock;

use crate::contract::{
    ErrorTranslator, LoginOperation, LogoutOperation, PasswordResetOperation,
    ReauthenticateOperation, RegisterOperation,
};
use crate::error::Result;
use crate::registry::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry
///
/// Created empty on first access; bootstrap populates it once via
/// [`crate::RegistrySetup::apply`] and it lives for the process.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Clear the process-wide registry (test teardown)
pub fn reset() {
    global().reset();
}

/// Resolve the active provider's login implementation
pub fn login() -> Result<Arc<dyn LoginOperation>> {
    global().login()
}

/// Resolve the active provider's register implementation
pub fn register() -> Result<Arc<dyn RegisterOperation>> {
    global().register()
}

/// Resolve the active provider's logout implementation
pub fn logout() -> Result<Arc<dyn LogoutOperation>> {
    global().logout()
}

/// Resolve the active provider's reauthentication implementation
///
/// Optional capability — callers branch on
/// [`AuthError::is_missing_capability`](crate::AuthError::is_missing_capability)
/// to degrade gracefully.
pub fn reauthenticate() -> Result<Arc<dyn ReauthenticateOperation>> {
    global().reauthenticate()
}

/// Resolve the active provider's password-reset implementation
pub fn password_reset() -> Result<Arc<dyn PasswordResetOperation>> {
    global().password_reset()
}

/// Resolve the active provider's error translator
pub fn error_handler() -> Result<Arc<dyn ErrorTranslator>> {
    global().error_handler()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{AuthSession, Feature, IdentityCredentials, OpResult};
    use crate::provider::ProviderDescriptor;
    use crate::scope;
    use chrono::Utc;

    struct FakeLogin;

    #[async_trait::async_trait]
    impl LoginOperation for FakeLogin {
        async fn login(&self, credentials: IdentityCredentials) -> OpResult<AuthSession> {
            Ok(AuthSession {
                session_id: "s".to_string(),
                user_id: credentials.identity,
                issued_at: Utc::now(),
            })
        }
    }

    // Single test: the global registry is shared process state, and
    // parallel tests mutating it would race each other.
    #[test]
    fn test_global_accessors_follow_active_provider() {
        reset();

        let err = login().err().unwrap();
        assert!(err.is_configuration());

        global().install(
            ProviderDescriptor::builder("firebase")
                .feature(Feature::Login(Arc::new(FakeLogin)))
                .build(),
        );
        global().set_default("firebase");

        let bound = login().unwrap();
        let again = login().unwrap();
        assert!(Arc::ptr_eq(&bound, &again));

        scope::with_provider("missing", || {
            assert!(login().err().unwrap().is_configuration());
        });
        assert!(login().is_ok());

        reset();
        assert!(login().err().unwrap().is_configuration());
    }
}
