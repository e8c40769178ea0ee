//! Report generation.
//!
//! - Table: aligned plain text for terminals, optionally colored
//! - JSON: structured data for scripting

mod json;
mod table;
mod types;

pub use json::JsonReporter;
pub use table::TableReporter;
pub use types::{RenderOptions, ReportFormat};

use crate::error::Result;
use crate::model::FocusPreset;
use crate::scoring::{Preferences, ScoredProfile};

/// Trait for report generators
pub trait Reporter {
    /// Report of every profile scored against `preferences`, in the given order
    fn score_report(&self, entries: &[ScoredProfile], preferences: &Preferences) -> Result<String>;

    /// Listing of a ranked, possibly truncated, catalog
    fn styles_report(&self, entries: &[ScoredProfile]) -> Result<String>;

    /// All focus presets
    fn presets_report(&self, presets: &[FocusPreset]) -> Result<String>;

    /// A single focus preset
    fn preset_report(&self, preset: &FocusPreset) -> Result<String>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Reporter for `format`.
#[must_use]
pub fn reporter_for(format: ReportFormat, options: RenderOptions) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Table => Box::new(TableReporter::new(options)),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_for_format() {
        for format in [ReportFormat::Table, ReportFormat::Json] {
            assert_eq!(reporter_for(format, RenderOptions::default()).format(), format);
        }
    }
}
