//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Rendering switches shared by the text reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Use Unicode glyphs (title slider, block bars)
    pub unicode: bool,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            color: false,
        }
    }
}
