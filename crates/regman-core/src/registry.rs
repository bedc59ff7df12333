//! Named, thread-safe key/value registry.
//!
//! A [`Registry`] maps keys to arbitrary values with insert-once semantics:
//! [`Registry::add`] never overwrites, it fails with
//! [`RegistryError::DuplicateKey`] instead. All reads and writes go through a
//! single lock, so every public method is one atomic critical section and the
//! copies returned by [`Registry::keys`] and [`Registry::list`] are consistent
//! snapshots.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::key::{KeyLike, RegistryKey};
use crate::register;
use crate::symbol::Symbol;

/// Named mapping from keys to values.
///
/// Values are handed out as clones, so store `Arc`s when identity matters.
/// Share a registry between threads by wrapping it in an `Arc`.
///
/// # Type Parameters
///
/// * `V` - The stored value type (a function pointer, `Arc<dyn Trait>`, plain data, ...)
/// * `K` - The key type, `String` unless stated otherwise
pub struct Registry<V, K = String> {
    name: String,
    entries: RwLock<IndexMap<K, V>>,
}

impl<V, K> Registry<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    /// Create an empty registry tagged with `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn check<Q>(&self, key: &Q) -> Result<(), RegistryError>
    where
        Q: KeyLike + ?Sized,
    {
        key.validate().map_err(|reason| {
            warn!(registry = %self.name, key = %key, %reason, "Rejected unusable key");
            RegistryError::InvalidKeyType {
                registry: self.name.clone(),
                key: key.to_string(),
                reason,
            }
        })
    }

    /// Insert `value` under `key`.
    ///
    /// Returns an error if the key is already present; the existing value is
    /// left untouched.
    pub fn add(&self, key: K, value: V) -> Result<(), RegistryError> {
        self.check(&key)?;

        let mut entries = self.entries.write();
        match entries.entry(key) {
            Entry::Occupied(existing) => {
                warn!(registry = %self.name, key = %existing.key(), "Duplicate registration rejected");
                Err(RegistryError::DuplicateKey {
                    registry: self.name.clone(),
                    key: existing.key().to_string(),
                })
            }
            Entry::Vacant(slot) => {
                debug!(registry = %self.name, key = %slot.key(), "Entry registered");
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Get the value registered under `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<V, RegistryError>
    where
        K: Borrow<Q>,
        Q: KeyLike + ?Sized,
    {
        self.check(key)?;

        self.entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::KeyNotFound {
                registry: self.name.clone(),
                key: key.to_string(),
            })
    }

    /// Remove the entry under `key`, returning its value if there was one.
    ///
    /// Never fails: an absent key and an unusable key both mean there is
    /// nothing to remove.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: KeyLike + ?Sized,
    {
        if key.validate().is_err() {
            return None;
        }

        let removed = self.entries.write().shift_remove(key);
        if removed.is_some() {
            debug!(registry = %self.name, key = %key, "Entry removed");
        }
        removed
    }

    /// Remove the entry under `key`, ignoring whether it existed.
    pub fn unregister<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: KeyLike + ?Sized,
    {
        self.remove(key);
    }

    /// Check if `key` is registered.
    pub fn contains<Q>(&self, key: &Q) -> Result<bool, RegistryError>
    where
        K: Borrow<Q>,
        Q: KeyLike + ?Sized,
    {
        self.check(key)?;
        Ok(self.entries.read().contains_key(key))
    }

    /// Copy of all registered keys, in insertion order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.read().keys().cloned().collect()
    }

    /// Copy of all entries, in insertion order.
    pub fn list(&self) -> IndexMap<K, V> {
        self.entries.read().clone()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let dropped = entries.len();
        entries.clear();
        debug!(registry = %self.name, dropped, "Registry cleared");
    }

    /// Diagnostic representation, e.g. `<Registry name=plugins size=3>`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Method form of [`register::register`].
    pub fn register<T>(&self, key: Option<K>) -> impl FnOnce(T) -> Result<T, RegistryError>
    where
        K: From<String>,
        T: Symbol + Clone + Into<V>,
    {
        register::register(self, key)
    }

    /// Method form of [`register::register_with`].
    pub fn register_with<T, C>(
        &self,
        key: Option<K>,
        convert: C,
    ) -> impl FnOnce(T) -> Result<T, RegistryError>
    where
        K: From<String>,
        T: Symbol,
        C: FnOnce(&T) -> V,
    {
        register::register_with(self, key, convert)
    }
}

impl<V, K> fmt::Display for Registry<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Registry name={} size={}>", self.name, self.len())
    }
}

impl<V, K> fmt::Debug for Registry<V, K>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
