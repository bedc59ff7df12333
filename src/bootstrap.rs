//! Build a registry manager from configuration.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ConfigError, ConfigLoader, ConfigValidator, RegmanConfig};
use regman_core::{RegistryError, RegistryKey, RegistryManager};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Create a manager holding one empty registry per `[[registries]]` entry.
///
/// The configuration is validated first; warnings are logged, errors abort
/// with [`ConfigError::InvalidValue`].
pub fn manager_from_config<V, K>(
    config: &RegmanConfig,
) -> Result<RegistryManager<V, K>, BootstrapError>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    let warnings = ConfigValidator::validate(config).into_result()?;
    for warning in &warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }

    let manager = RegistryManager::new();
    for registry in &config.registries {
        manager.create_registry(registry.name.as_str())?;
        info!(
            registry = %registry.name,
            description = registry.description.as_deref().unwrap_or(""),
            "Registry created from config"
        );
    }

    Ok(manager)
}

/// Load a TOML file and build a manager from it.
///
/// A leading `~` in `path` is expanded to the home directory.
pub fn manager_from_path<V, K>(path: &str) -> Result<RegistryManager<V, K>, BootstrapError>
where
    K: RegistryKey,
    V: Clone + Send + Sync,
{
    let config = ConfigLoader::load_path(path)?;
    manager_from_config(&config)
}
