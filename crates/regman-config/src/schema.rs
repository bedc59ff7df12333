//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegmanConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Registries created when a manager is bootstrapped, in order.
    #[serde(default)]
    pub registries: Vec<RegistryConfig>,
}

impl RegmanConfig {
    /// Names of the configured registries, in declaration order.
    pub fn registry_names(&self) -> Vec<&str> {
        self.registries.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// A registry to create at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl RegistryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegmanConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.registries.is_empty());
    }

    #[test]
    fn test_deserialize_registries() {
        let config: RegmanConfig = toml::from_str(
            r#"
            [[registries]]
            name = "plugins"
            description = "Loaded plugins"

            [[registries]]
            name = "strategies"
            "#,
        )
        .unwrap();

        assert_eq!(config.registry_names(), vec!["plugins", "strategies"]);
        assert_eq!(
            config.registries[0].description.as_deref(),
            Some("Loaded plugins")
        );
        assert!(config.registries[1].description.is_none());
    }

    #[test]
    fn test_deserialize_log_format() {
        let config: RegmanConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let result: Result<RegmanConfig, _> = toml::from_str(
            r#"
            [logging]
            format = "xml"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_requires_name() {
        let result: Result<RegmanConfig, _> = toml::from_str(
            r#"
            [[registries]]
            description = "nameless"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_roundtrip_preserves_order() {
        let config = RegmanConfig {
            logging: LoggingConfig::default(),
            registries: vec![RegistryConfig::new("b"), RegistryConfig::new("a")],
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: RegmanConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.registry_names(), vec!["b", "a"]);
    }
}
