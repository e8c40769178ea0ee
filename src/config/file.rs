//! Configuration file loading and discovery.

use super::types::AppConfig;
use crate::error::FocusError;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".web3-focus-slider.yaml",
    ".web3-focus-slider.yml",
    "web3-focus-slider.yaml",
    "web3-focus-slider.yml",
];

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "web3-focus-slider";

/// Directories searched for a config file, in order:
///
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/web3-focus-slider/)
/// 4. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let git_root = cwd.as_deref().and_then(find_git_root);
    [
        cwd,
        git_root,
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Discover a config file: the explicit path if it exists, otherwise the
/// first match in [`config_search_dirs`].
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<ConfigFileError> for FocusError {
    fn from(err: ConfigFileError) -> Self {
        Self::config(err.to_string())
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// An unreadable or malformed file is logged and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load the effective configuration.
///
/// A file named with `--config` must exist and parse; a failure there is a
/// [`FocusError::Config`]. Without one, discovery falls back to
/// [`load_or_default`].
pub fn load_config(
    explicit_path: Option<&Path>,
) -> crate::error::Result<(AppConfig, Option<PathBuf>)> {
    match explicit_path {
        Some(path) => {
            let config = load_config_file(path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path.to_path_buf())))
        }
        None => Ok(load_or_default(None)),
    }
}

/// Generate an example config file with the default values.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        "# web3-focus-slider configuration
# Place this file at .web3-focus-slider.yaml in your project root
# or in ~/.config/web3-focus-slider/. CLI flags override these values.

{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}
