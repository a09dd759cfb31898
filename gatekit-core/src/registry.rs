//! The provider registry and resolution engine
//!
//! The registry is the process-wide store of installed provider
//! descriptors plus the designated default provider id. Resolution maps a
//! capability key (plus the active or an explicit provider id) to the
//! concrete implementation registered for it — a pure, synchronous lookup
//! with no I/O and no retry semantics. The implementation returned owns all
//! of that.
//!
//! Lifecycle: one registry is created at application bootstrap and lives
//! for the process (see [`crate::access::global`]); local instances remain
//! cheap to construct for tests, and [`Registry::reset`] gives tests a
//! clean slate.
//!
//! Rust hosts can run true parallel threads, so the interior sits behind a
//! single `parking_lot::RwLock`; `resolve` performs the default-provider
//! read and both lookups under one read guard for consistency.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::contract::{
    CapabilityKey, ErrorTranslator, Feature, LoginOperation, LogoutOperation,
    PasswordResetOperation, ReauthenticateOperation, RegisterOperation,
};
use crate::error::{AuthError, Result};
use crate::provider::ProviderDescriptor;
use crate::scope;

#[derive(Debug, Default)]
struct RegistryInner {
    providers: HashMap<String, ProviderDescriptor>,
    default_provider: Option<String>,
}

/// Process-wide store of provider descriptors and the default provider id
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<RegistryInner>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a provider descriptor, replacing any previous descriptor
    /// under the same id wholesale
    ///
    /// Installation never merges: a key bound only by the replaced
    /// descriptor stops resolving. Safe to call repeatedly during staged
    /// bootstrap.
    pub fn install(&self, descriptor: ProviderDescriptor) {
        let mut inner = self.inner.write();
        let replaced = inner.providers.contains_key(&descriptor.id);
        tracing::debug!(
            provider_id = %descriptor.id,
            capabilities = descriptor.features.len(),
            replaced,
            "provider installed"
        );
        inner.providers.insert(descriptor.id.clone(), descriptor);
    }

    /// Record the default provider id
    ///
    /// Only intent is recorded here — installation order is not guaranteed
    /// during staged bootstrap, so validity is checked when a resolution
    /// actually consults the default.
    pub fn set_default(&self, provider_id: impl Into<String>) {
        let provider_id = provider_id.into();
        tracing::debug!(provider_id = %provider_id, "default provider set");
        self.inner.write().default_provider = Some(provider_id);
    }

    /// The recorded default provider id, if any
    pub fn default_provider(&self) -> Option<String> {
        self.inner.read().default_provider.clone()
    }

    /// Look up an installed descriptor by id
    pub fn get(&self, provider_id: &str) -> Option<ProviderDescriptor> {
        self.inner.read().providers.get(provider_id).cloned()
    }

    /// Whether a provider is installed under this id
    pub fn contains(&self, provider_id: &str) -> bool {
        self.inner.read().providers.contains_key(provider_id)
    }

    /// Ids of all installed providers
    pub fn provider_ids(&self) -> Vec<String> {
        self.inner.read().providers.keys().cloned().collect()
    }

    /// Number of installed providers
    pub fn len(&self) -> usize {
        self.inner.read().providers.len()
    }

    /// Whether no provider is installed
    pub fn is_empty(&self) -> bool {
        self.inner.read().providers.is_empty()
    }

    /// Clear all providers and the default id
    ///
    /// Test-teardown hook; production bootstrap installs once and never
    /// tears down.
    pub fn reset(&self) {
        tracing::debug!("registry reset");
        let mut inner = self.inner.write();
        inner.providers.clear();
        inner.default_provider = None;
    }

    /// The provider id an unqualified resolution would consult right now:
    /// the innermost scoped override, else the recorded default
    pub fn active_provider(&self) -> Result<String> {
        match scope::current_override() {
            Some(id) => Ok(id),
            None => self
                .inner
                .read()
                .default_provider
                .clone()
                .ok_or(AuthError::DefaultProviderUnset),
        }
    }

    /// Resolve a capability key to its registered implementation
    ///
    /// Target selection: `provider_id` if given, else the innermost scoped
    /// override, else the recorded default. The binding is returned
    /// unchanged — no wrapping, no memoization — so every resolution
    /// reflects the current installations.
    pub fn resolve(&self, key: CapabilityKey, provider_id: Option<&str>) -> Result<Feature> {
        let scoped = if provider_id.is_none() {
            scope::current_override()
        } else {
            None
        };

        let inner = self.inner.read();
        let target = match provider_id {
            Some(id) => id,
            None => match &scoped {
                Some(id) => id.as_str(),
                None => inner
                    .default_provider
                    .as_deref()
                    .ok_or(AuthError::DefaultProviderUnset)?,
            },
        };

        let descriptor =
            inner
                .providers
                .get(target)
                .ok_or_else(|| AuthError::UnknownProvider {
                    provider_id: target.to_string(),
                })?;

        let feature = descriptor
            .features
            .get(key)
            .cloned()
            .ok_or_else(|| AuthError::MissingCapability {
                provider_id: target.to_string(),
                capability: key,
            })?;

        tracing::trace!(provider_id = %target, capability = %key, "capability resolved");
        Ok(feature)
    }

    /// Resolve the login capability against the active provider
    pub fn login(&self) -> Result<Arc<dyn LoginOperation>> {
        self.login_with(None)
    }

    /// Resolve the login capability against an explicit provider
    pub fn login_with(&self, provider_id: Option<&str>) -> Result<Arc<dyn LoginOperation>> {
        match self.resolve(CapabilityKey::Login, provider_id)?.into_login() {
            Some(op) => Ok(op),
            // FeatureSet keys every binding by Feature::key(), so the
            // variant always matches the requested key.
            None => unreachable!("login key bound to a non-login feature"),
        }
    }

    /// Resolve the register capability against the active provider
    pub fn register(&self) -> Result<Arc<dyn RegisterOperation>> {
        self.register_with(None)
    }

    /// Resolve the register capability against an explicit provider
    pub fn register_with(&self, provider_id: Option<&str>) -> Result<Arc<dyn RegisterOperation>> {
        match self
            .resolve(CapabilityKey::Register, provider_id)?
            .into_register()
        {
            Some(op) => Ok(op),
            None => unreachable!("register key bound to a non-register feature"),
        }
    }

    /// Resolve the logout capability against the active provider
    pub fn logout(&self) -> Result<Arc<dyn LogoutOperation>> {
        self.logout_with(None)
    }

    /// Resolve the logout capability against an explicit provider
    pub fn logout_with(&self, provider_id: Option<&str>) -> Result<Arc<dyn LogoutOperation>> {
        match self
            .resolve(CapabilityKey::Logout, provider_id)?
            .into_logout()
        {
            Some(op) => Ok(op),
            None => unreachable!("logout key bound to a non-logout feature"),
        }
    }

    /// Resolve the reauthentication capability against the active provider
    ///
    /// Optional by contract: expect [`AuthError::MissingCapability`] from
    /// providers without a reauthentication flow.
    pub fn reauthenticate(&self) -> Result<Arc<dyn ReauthenticateOperation>> {
        self.reauthenticate_with(None)
    }

    /// Resolve the reauthentication capability against an explicit provider
    pub fn reauthenticate_with(
        &self,
        provider_id: Option<&str>,
    ) -> Result<Arc<dyn ReauthenticateOperation>> {
        match self
            .resolve(CapabilityKey::Reauthenticate, provider_id)?
            .into_reauthenticate()
        {
            Some(op) => Ok(op),
            None => unreachable!("reauthenticate key bound to a non-reauthenticate feature"),
        }
    }

    /// Resolve the password-reset capability against the active provider
    pub fn password_reset(&self) -> Result<Arc<dyn PasswordResetOperation>> {
        self.password_reset_with(None)
    }

    /// Resolve the password-reset capability against an explicit provider
    pub fn password_reset_with(
        &self,
        provider_id: Option<&str>,
    ) -> Result<Arc<dyn PasswordResetOperation>> {
        match self
            .resolve(CapabilityKey::PasswordReset, provider_id)?
            .into_password_reset()
        {
            Some(op) => Ok(op),
            None => unreachable!("passwordReset key bound to a non-passwordReset feature"),
        }
    }

    /// Resolve the error-handler capability against the active provider
    pub fn error_handler(&self) -> Result<Arc<dyn ErrorTranslator>> {
        self.error_handler_with(None)
    }

    /// Resolve the error-handler capability against an explicit provider
    pub fn error_handler_with(
        &self,
        provider_id: Option<&str>,
    ) -> Result<Arc<dyn ErrorTranslator>> {
        match self
            .resolve(CapabilityKey::ErrorHandler, provider_id)?
            .into_error_handler()
        {
            Some(op) => Ok(op),
            None => unreachable!("errorHandler key bound to a non-errorHandler feature"),
        }
    }
}
