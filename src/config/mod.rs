//! Configuration module for web3-focus-slider.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation that reports, rather than rejects, out-of-range values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.web3-focus-slider.yaml` file in your project root or
//! `~/.config/web3-focus-slider/`:
//!
//! ```yaml
//! preferences:
//!   privacy: 9
//!   soundness: 8
//!   speed: 5
//! listing:
//!   sort_by: privacy
//!   limit: 2
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config,
    load_config_file, load_or_default, ConfigFileError, CONFIG_DIR_NAME, CONFIG_FILE_NAMES,
};
pub use types::{
    AppConfig, EnvCheckConfig, ListingConfig, OutputConfig, PreferenceConfig,
    DEFAULT_REQUIRED_VARS,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("preferences"));
        assert!(schema.contains("required_vars"));
    }
}
