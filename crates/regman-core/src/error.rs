//! Registry errors.

use thiserror::Error;

/// Errors raised by [`Registry`](crate::Registry) and
/// [`RegistryManager`](crate::RegistryManager).
///
/// Every variant carries the owning registry or manager-level name and the
/// offending key, so callers can branch on the variant and still log a useful
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{registry}: '{key}' already registered.")]
    DuplicateKey { registry: String, key: String },

    #[error("{registry}: '{key}' not found.")]
    KeyNotFound { registry: String, key: String },

    #[error("Registry '{name}' already exists.")]
    DuplicateRegistry { name: String },

    #[error("Registry '{name}' not found.")]
    RegistryNotFound { name: String },

    #[error("{registry}: unusable key {key}: {reason}")]
    InvalidKeyType {
        registry: String,
        key: String,
        reason: String,
    },
}

impl RegistryError {
    /// True for `DuplicateKey` and `DuplicateRegistry`.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey { .. } | Self::DuplicateRegistry { .. }
        )
    }

    /// True for `KeyNotFound` and `RegistryNotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. } | Self::RegistryNotFound { .. })
    }

    /// Name of the registry the error refers to.
    pub fn registry_name(&self) -> &str {
        match self {
            Self::DuplicateKey { registry, .. }
            | Self::KeyNotFound { registry, .. }
            | Self::InvalidKeyType { registry, .. } => registry,
            Self::DuplicateRegistry { name } | Self::RegistryNotFound { name } => name,
        }
    }
}
