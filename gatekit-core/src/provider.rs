//! Provider descriptors
//!
//! A provider is a named backend integration (Firebase, Supabase, …)
//! supplying implementations for some subset of the capability keys. The
//! descriptor is the unit of installation: once handed to the registry it is
//! never partially mutated — swapping a provider means installing a fresh
//! descriptor under the same id.

use std::collections::HashMap;

use serde_json::Value;

use crate::contract::{CapabilityKey, Feature};

/// The capability bindings of one provider
///
/// Each key maps to at most one implementation; binding a key twice keeps
/// the later binding.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    bindings: HashMap<CapabilityKey, Feature>,
}

impl FeatureSet {
    /// Create an empty feature set
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a feature, replacing any previous binding for its key
    pub fn insert(&mut self, feature: Feature) -> Option<Feature> {
        self.bindings.insert(feature.key(), feature)
    }

    /// Look up the binding for a key
    pub fn get(&self, key: CapabilityKey) -> Option<&Feature> {
        self.bindings.get(&key)
    }

    /// Whether the key is bound
    pub fn contains(&self, key: CapabilityKey) -> bool {
        self.bindings.contains_key(&key)
    }

    /// All bound keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = CapabilityKey> + '_ {
        self.bindings.keys().copied()
    }

    /// Number of bound capabilities
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no capability is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        let mut set = FeatureSet::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

/// A named bundle of capability bindings plus optional init data
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    /// Provider identifier (e.g. "firebase", "supabase")
    pub id: String,

    /// Capability bindings
    pub features: FeatureSet,

    /// Provider-specific initialization data (connection credentials,
    /// project ids). Opaque to the core; only the provider's own
    /// implementations read it.
    pub credentials: Option<Value>,
}

impl ProviderDescriptor {
    /// Start building a descriptor for the given provider id
    pub fn builder(id: impl Into<String>) -> ProviderDescriptorBuilder {
        ProviderDescriptorBuilder {
            id: id.into(),
            features: FeatureSet::new(),
            credentials: None,
        }
    }
}

/// Builder for [`ProviderDescriptor`]
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
    id: String,
    features: FeatureSet,
    credentials: Option<Value>,
}

impl ProviderDescriptorBuilder {
    /// Bind a feature (later bindings for the same key win)
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    /// Attach opaque init data
    pub fn credentials(mut self, credentials: Value) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> ProviderDescriptor {
        ProviderDescriptor {
            id: self.id,
            features: self.features,
            credentials: self.credentials,
        }
    }
}
