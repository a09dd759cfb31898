//! Installation surface for application bootstrap
//!
//! Bootstrap code assembles a [`RegistrySetup`] — the default provider id
//! plus every provider descriptor — and applies it in one call:
//!
//! ```rust
//! use gatekit_core::{Registry, RegistrySetup, ProviderDescriptor};
//! use serde_json::json;
//!
//! let registry = Registry::new();
//! RegistrySetup::new("firebase")
//!     .provider(
//!         ProviderDescriptor::builder("firebase")
//!             .credentials(json!({ "apiKey": "k" }))
//!             .build(),
//!     )
//!     .apply(&registry);
//!
//! assert_eq!(registry.default_provider().as_deref(), Some("firebase"));
//! ```

use crate::provider::ProviderDescriptor;
use crate::registry::Registry;

/// One-shot bootstrap configuration: default provider id plus descriptors
#[derive(Debug, Default)]
pub struct RegistrySetup {
    /// Provider unqualified resolutions fall back to
    pub default_provider: Option<String>,
    /// Descriptors to install, in order
    pub providers: Vec<ProviderDescriptor>,
}

impl RegistrySetup {
    /// Start a setup with the given default provider id
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            default_provider: Some(default_provider.into()),
            providers: Vec::new(),
        }
    }

    /// A setup with no default; every resolution must name its provider
    /// explicitly or run inside a scoped override
    pub fn without_default() -> Self {
        Self::default()
    }

    /// Add a provider descriptor
    pub fn provider(mut self, descriptor: ProviderDescriptor) -> Self {
        self.providers.push(descriptor);
        self
    }

    /// Install everything into `registry`
    ///
    /// Descriptors install in order (later descriptors under the same id
    /// replace earlier ones wholesale), then the default id is recorded.
    /// The default may name a provider installed later by another setup —
    /// validity is checked at resolution time.
    pub fn apply(self, registry: &Registry) {
        let provider_count = self.providers.len();
        for descriptor in self.providers {
            registry.install(descriptor);
        }
        if let Some(default_provider) = self.default_provider {
            registry.set_default(default_provider);
        }
        tracing::debug!(providers = provider_count, "registry setup applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{
        AuthSession, CapabilityKey, Feature, IdentityCredentials, LoginOperation, OpResult,
    };
    use chrono::Utc;
    use std::sync::Arc;

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

    #[test]
    fn test_apply_installs_providers_and_default() {
        let registry = Registry::new();

        RegistrySetup::new("firebase")
            .provider(
                ProviderDescriptor::builder("firebase")
                    .feature(Feature::Login(Arc::new(FakeLogin)))
                    .build(),
            )
            .provider(
                ProviderDescriptor::builder("supabase")
                    .feature(Feature::Login(Arc::new(FakeLogin)))
                    .build(),
            )
            .apply(&registry);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.default_provider().as_deref(), Some("firebase"));
        assert!(registry.resolve(CapabilityKey::Login, None).is_ok());
    }

    #[test]
    fn test_without_default() {
        let registry = Registry::new();
        RegistrySetup::without_default()
            .provider(
                ProviderDescriptor::builder("firebase")
                    .feature(Feature::Login(Arc::new(FakeLogin)))
                    .build(),
            )
            .apply(&registry);

        assert_eq!(registry.default_provider(), None);
        assert!(registry.resolve(CapabilityKey::Login, Some("firebase")).is_ok());
        assert!(registry.resolve(CapabilityKey::Login, None).is_err());
    }
}
