//! Unified error types for web3-focus-slider.
//!
//! The scoring core is total and never fails; these errors only come out of
//! the I/O layer (config files, JSON inspection, preset lookup).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for web3-focus-slider operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FocusError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {context}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Config file that was asked for but could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Lookup of a focus preset that does not exist
    #[error("unknown preset '{name}'. Choices: {choices}")]
    UnknownPreset { name: String, choices: String },
}

/// Convenient Result type for web3-focus-slider operations
pub type Result<T> = std::result::Result<T, FocusError>;

impl FocusError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an unknown-preset error listing the valid names
    pub fn unknown_preset<'a>(
        name: impl Into<String>,
        choices: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownPreset {
            name: name.into(),
            choices: choices.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

impl From<std::io::Error> for FocusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for FocusError {
    fn from(err: serde_json::Error) -> Self {
        Self::json("JSON deserialization", err)
    }
}

// ============================================================================
// Error context extension traits
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure three calls
/// deep reads `outer: middle: inner`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<FocusError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: FocusError, new_ctx: &str) -> FocusError {
    match err {
        FocusError::Io {
            path,
            message,
            source,
        } => FocusError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        FocusError::Json { context, source } => FocusError::Json {
            context: chain_context(new_ctx, &context),
            source,
        },
        FocusError::Config(msg) => FocusError::Config(chain_context(new_ctx, &msg)),
        // Already self-describing
        other @ FocusError::UnknownPreset { .. } => other,
    }
}

/// Returns `"new: existing"`, or just `new` when there is nothing to chain onto.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
