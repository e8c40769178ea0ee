//! Configuration types for web3-focus-slider.

use crate::reports::ReportFormat;
use crate::scoring::{Preferences, SortField};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Unified application configuration, loaded from a config file and then
/// overridden by any explicitly passed CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Default importance ratings for `score` and `styles`
    pub preferences: PreferenceConfig,
    /// Ordering and truncation for `styles`
    pub listing: ListingConfig,
    /// Output format and rendering
    pub output: OutputConfig,
    /// Environment variables checked by `env`
    pub env: EnvCheckConfig,
}

/// Importance ratings on the 0-10 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Privacy importance (0-10)
    pub privacy: i64,
    /// Soundness / proofs importance (0-10)
    pub soundness: i64,
    /// UX speed importance (0-10)
    pub speed: i64,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            privacy: 8,
            soundness: 7,
            speed: 6,
        }
    }
}

impl PreferenceConfig {
    /// Resolve against optional CLI overrides.
    #[must_use]
    pub fn resolve(
        &self,
        privacy: Option<i64>,
        soundness: Option<i64>,
        speed: Option<i64>,
    ) -> Preferences {
        Preferences::new(
            privacy.unwrap_or(self.privacy),
            soundness.unwrap_or(self.soundness),
            speed.unwrap_or(self.speed),
        )
    }
}

/// Listing options for the `styles` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ListingConfig {
    /// Sort field: key, privacy, soundness, speed
    pub sort_by: SortField,
    /// Sort numeric fields lowest first
    pub ascending: bool,
    /// Show only the top N rows after sorting (0 = all)
    pub limit: i64,
}

impl ListingConfig {
    /// Sort direction after applying `--ascending` / `--descending`.
    ///
    /// An explicit flag always wins over the file value.
    #[must_use]
    pub fn resolve_ascending(&self, ascending_flag: Option<bool>) -> bool {
        ascending_flag.unwrap_or(self.ascending)
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: table, json
    pub format: ReportFormat,
    /// Use Unicode symbols (title glyph, block bars)
    pub unicode: bool,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Table,
            unicode: true,
            no_color: false,
        }
    }
}

/// Environment check configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EnvCheckConfig {
    /// Variables that must be set and non-empty
    pub required_vars: Vec<String>,
}

impl Default for EnvCheckConfig {
    fn default() -> Self {
        Self {
            required_vars: DEFAULT_REQUIRED_VARS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Variables the on-chain tooling needs.
pub const DEFAULT_REQUIRED_VARS: &[&str] = &["RPC_URL", "PRIVATE_KEY", "CONTRACT_ADDRESS"];
