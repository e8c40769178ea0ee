//! Configuration validation for web3-focus-slider.
//!
//! Preference values outside 0-10 are reported here but are not fatal; the
//! CLI logs them and clamps.

use super::types::{AppConfig, EnvCheckConfig, ListingConfig, OutputConfig, PreferenceConfig};
use crate::scoring::PREFERENCE_MAX;

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.preferences.validate());
        errors.extend(self.listing.validate());
        errors.extend(self.output.validate());
        errors.extend(self.env.validate());
        errors
    }
}

impl Validatable for PreferenceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("privacy", self.privacy),
            ("soundness", self.soundness),
            ("speed", self.speed),
        ]
        .into_iter()
        .filter(|(_, value)| !(0..=PREFERENCE_MAX).contains(value))
        .map(|(name, value)| ConfigError {
            field: format!("preferences.{name}"),
            message: format!("{value} is out of range, will be clamped to [0,{PREFERENCE_MAX}]"),
        })
        .collect()
    }
}

impl Validatable for ListingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.limit < 0 {
            errors.push(ConfigError {
                field: "listing.limit".to_string(),
                message: format!("{} is negative; all rows will be shown", self.limit),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Closed enum and booleans only
        Vec::new()
    }
}

impl Validatable for EnvCheckConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.required_vars
            .iter()
            .filter(|name| name.trim().is_empty() || name.contains('='))
            .map(|name| ConfigError {
                field: "env.required_vars".to_string(),
                message: format!("'{name}' is not a valid environment variable name"),
            })
            .collect()
    }
}
