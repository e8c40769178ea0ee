//! Presence checks for required environment variables.
//!
//! Values are never printed or returned, only whether they are set.

use serde::Serialize;

/// Presence of one variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVarStatus {
    pub name: String,
    /// Set and not blank
    pub present: bool,
}

/// Outcome of an environment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvReport {
    pub vars: Vec<EnvVarStatus>,
    pub warnings: Vec<String>,
}

impl EnvReport {
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.vars.iter().all(|v| v.present)
    }

    /// Names of the variables that are missing or blank.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.vars
            .iter()
            .filter(|v| !v.present)
            .map(|v| v.name.as_str())
            .collect()
    }
}

/// RPC URLs copied from a provider template still carry the placeholder project key.
#[must_use]
pub fn is_placeholder_rpc_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.contains("your") && lower.contains("infura.io")
}

/// Check `names` using `lookup` to read variables.
///
/// `lookup` is injected so callers can check the process environment
/// (`|k| std::env::var(k).ok()`) or a fixed map in tests.
pub fn check_env<F>(names: &[String], lookup: F) -> EnvReport
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();
    let vars = names
        .iter()
        .map(|name| {
            let value = lookup(name).map(|v| v.trim().to_string());
            if name == "RPC_URL" {
                if let Some(url) = value.as_deref() {
                    if is_placeholder_rpc_url(url) {
                        warnings.push(
                            "RPC_URL looks like it still contains a placeholder Infura project key"
                                .to_string(),
                        );
                    }
                }
            }
            EnvVarStatus {
                name: name.clone(),
                present: value.is_some_and(|v| !v.is_empty()),
            }
        })
        .collect();

    EnvReport { vars, warnings }
}

/// Check against the process environment.
#[must_use]
pub fn check_process_env(names: &[String]) -> EnvReport {
    check_env(names, |name| std::env::var(name).ok())
}
