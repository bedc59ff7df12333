//! Registry manager.
//!
//! Owns any number of independently named [`Registry`] instances. The manager
//! only tracks which registries exist; keyed entries live in the registries
//! themselves, each behind its own lock.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::key::RegistryKey;
use crate::registry::Registry;

/// Named collection of registries sharing one value and key type.
pub struct RegistryManager<V, K = String> {
    registries: RwLock<IndexMap<String, Arc<Registry<V, K>>>>,
}

impl<V, K> RegistryManager<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    /// Create an empty manager.
    pub fn new() -> Self {
        Self {
            registries: RwLock::new(IndexMap::new()),
        }
    }

    /// Create and store an empty registry under `name`.
    ///
    /// Returns an error if a registry with that name already exists; the
    /// existing registry is left untouched.
    pub fn create_registry(
        &self,
        name: impl Into<String>,
    ) -> Result<Arc<Registry<V, K>>, RegistryError> {
        let name = name.into();

        let mut registries = self.registries.write();
        match registries.entry(name) {
            Entry::Occupied(existing) => {
                warn!(registry = %existing.key(), "Duplicate registry rejected");
                Err(RegistryError::DuplicateRegistry {
                    name: existing.key().clone(),
                })
            }
            Entry::Vacant(slot) => {
                let registry = Arc::new(Registry::new(slot.key().clone()));
                debug!(registry = %slot.key(), "Registry created");
                slot.insert(Arc::clone(&registry));
                Ok(registry)
            }
        }
    }

    /// Get the registry stored under `name`.
    pub fn get_registry(&self, name: &str) -> Result<Arc<Registry<V, K>>, RegistryError> {
        self.registries
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::RegistryNotFound {
                name: name.to_string(),
            })
    }

    /// Copy of the name to registry map.
    ///
    /// Only the map is copied: the registries are shared with the manager.
    pub fn all(&self) -> IndexMap<String, Arc<Registry<V, K>>> {
        self.registries.read().clone()
    }

    /// Names of all registries, in creation order.
    pub fn names(&self) -> Vec<String> {
        self.registries.read().keys().cloned().collect()
    }

    /// Check if a registry named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.registries.read().contains_key(name)
    }

    /// Number of registries.
    pub fn len(&self) -> usize {
        self.registries.read().len()
    }

    /// Check if no registry has been created.
    pub fn is_empty(&self) -> bool {
        self.registries.read().is_empty()
    }

    /// Diagnostic representation, e.g. `<RegistryManager registries=['a', 'b']>`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<V, K> Default for RegistryManager<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K> fmt::Display for RegistryManager<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .names()
            .iter()
            .map(|name| format!("'{}'", name))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "<RegistryManager registries=[{}]>", names)
    }
}

impl<V, K> fmt::Debug for RegistryManager<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryManager")
            .field("registries", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
