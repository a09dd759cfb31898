//! # Gatekit Core — capability registry for pluggable auth backends
//!
//! Gatekit lets application code request an authentication *capability*
//! ("log in with identity+password") without knowing which backend
//! (Firebase, Supabase, Auth0, …) implements it:
//!
//! - **Contract set**: the closed catalogue of capability keys and the
//!   input/output shape each implementation must satisfy
//! - **Registry**: process-wide store of provider descriptors plus the
//!   default provider id
//! - **Scope**: the active-context selector — ambient, nestable provider
//!   overrides with panic-safe restoration
//! - **Resolution**: a pure, synchronous lookup from capability key (plus
//!   active or explicit provider) to the registered implementation
//!
//! The concrete backend integrations stay out of the core: they are black
//! boxes satisfying a capability's contract, registered at bootstrap and
//! invoked directly by the consumer.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gatekit_core::contract::{
//!     AuthSession, Feature, IdentityCredentials, LoginOperation, OpResult,
//! };
//! use gatekit_core::{scope, ProviderDescriptor, Registry, RegistrySetup};
//!
//! struct FirebaseLogin;
//!
//! #[async_trait::async_trait]
//! impl LoginOperation for FirebaseLogin {
//!     async fn login(&self, credentials: IdentityCredentials) -> OpResult<AuthSession> {
//!         // Real providers call their SDK here.
//!         Ok(AuthSession {
//!             session_id: "fb-session".to_string(),
//!             user_id: credentials.identity,
//!             issued_at: chrono::Utc::now(),
//!         })
//!     }
//! }
//!
//! let registry = Registry::new();
//! RegistrySetup::new("firebase")
//!     .provider(
//!         ProviderDescriptor::builder("firebase")
//!             .feature(Feature::Login(Arc::new(FirebaseLogin)))
//!             .credentials(serde_json::json!({ "apiKey": "demo" }))
//!             .build(),
//!     )
//!     .apply(&registry);
//!
//! // Unqualified resolution consults the default provider...
//! let _login = registry.login().unwrap();
//!
//! // ...and a scoped override swaps the backend for its extent only.
//! scope::with_provider("firebase", || {
//!     assert!(registry.login().is_ok());
//! });
//! ```

pub mod access;
pub mod config;
pub mod contract;
pub mod error;
pub mod provider;
pub mod registry;
pub mod scope;

// Re-export main types
pub use config::RegistrySetup;
pub use contract::{AuthFailure, CapabilityKey, Category, FailureKind, Feature};
pub use error::{AuthError, ErrorCategory, ErrorDetail, ErrorResponse, Result};
pub use provider::{FeatureSet, ProviderDescriptor};
pub use registry::Registry;
pub use scope::{current_override, with_provider, ProviderScope};

/// Contract set version
pub const CONTRACT_VERSION: &str = "1.0";

#[cfg(test)]
mod tests {
    use super::*;
    use contract::{
        AuthSession, IdentityCredentials, LoginOperation, NewIdentity, OpResult,
        RegisterOperation,
    };
    use std::sync::Arc;

    struct FakeLogin;

    #[async_trait::async_trait]
    impl LoginOperation for FakeLogin {
        async fn login(&self, credentials: IdentityCredentials) -> OpResult<AuthSession> {
            Ok(AuthSession {
                session_id: "s".to_string(),
                user_id: credentials.identity,
                issued_at: chrono::Utc::now(),
            })
        }
    }

    struct FakeRegister;

    #[async_trait::async_trait]
    impl RegisterOperation for FakeRegister {
        async fn register(&self, identity: NewIdentity) -> OpResult<AuthSession> {
            Ok(AuthSession {
                session_id: "s".to_string(),
                user_id: identity.identity,
                issued_at: chrono::Utc::now(),
            })
        }
    }

    // The end-to-end scenario: fb binds login only, sb binds login and
    // register, default fb.
    #[test]
    fn test_two_provider_workflow() {
        let impl_a: Arc<dyn LoginOperation> = Arc::new(FakeLogin);
        let impl_b: Arc<dyn LoginOperation> = Arc::new(FakeLogin);
        let impl_c: Arc<dyn RegisterOperation> = Arc::new(FakeRegister);

        let registry = Registry::new();
        RegistrySetup::new("fb")
            .provider(
                ProviderDescriptor::builder("fb")
                    .feature(Feature::Login(impl_a.clone()))
                    .build(),
            )
            .provider(
                ProviderDescriptor::builder("sb")
                    .feature(Feature::Login(impl_b.clone()))
                    .feature(Feature::Register(impl_c.clone()))
                    .build(),
            )
            .apply(&registry);

        assert!(Arc::ptr_eq(&registry.login().unwrap(), &impl_a));

        let err = registry.register().err().unwrap();
        assert!(err.is_missing_capability());

        let resolved = with_provider("sb", || registry.register().unwrap());
        assert!(Arc::ptr_eq(&resolved, &impl_c));

        // Back outside the scope, fb is active again
        assert!(Arc::ptr_eq(&registry.login().unwrap(), &impl_a));
    }
}
