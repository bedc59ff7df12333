//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::RegmanConfig;

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the collected errors into a single `ConfigError`.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.first() {
            None => Ok(self.warnings),
            Some(first) => Err(ConfigError::InvalidValue {
                field: first.path.clone(),
                message: self
                    .errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            }),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &RegmanConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_registries(config, &mut result);

        result
    }

    fn validate_logging(config: &RegmanConfig, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
            return;
        }

        for directive in level.split(',').map(str::trim) {
            // `target=level` pins a level; a bare word is either a level or a target.
            if let Some((target, directive_level)) = directive.split_once('=') {
                if target.trim().is_empty() {
                    result.add_error(ValidationError::new(
                        "logging.level",
                        format!("Directive '{}' has no target", directive),
                    ));
                }
                if !LEVELS.contains(&directive_level.trim().to_lowercase().as_str()) {
                    result.add_error(ValidationError::new(
                        "logging.level",
                        format!(
                            "Unknown level '{}', valid values: {:?}",
                            directive_level, LEVELS
                        ),
                    ));
                }
            } else if directive.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "logging.level",
                    "Empty directive will be ignored",
                ));
            }
        }
    }

    fn validate_registries(config: &RegmanConfig, result: &mut ValidationResult) {
        let mut seen = HashSet::new();

        for (index, registry) in config.registries.iter().enumerate() {
            let path = format!("registries[{}].name", index);

            if registry.name.is_empty() {
                result.add_warning(ValidationWarning::new(
                    path.clone(),
                    "Registry name is empty",
                ));
            }

            if !seen.insert(registry.name.as_str()) {
                result.add_error(ValidationError::new(
                    path,
                    format!("Registry '{}' is declared more than once", registry.name),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
