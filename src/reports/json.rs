//! JSON reporter.
//!
//! Pretty-printed with two-space indentation. Style entries carry the fields
//! `key, name, privacy, soundness, uxSpeed, note, fitScore, label`.

use super::{ReportFormat, Reporter};
use crate::error::{ErrorContext, Result};
use crate::model::FocusPreset;
use crate::scoring::{Preferences, ScoredProfile};
use serde::Serialize;

/// JSON reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn to_pretty<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| format!("serializing {what}"))
}

impl Reporter for JsonReporter {
    fn score_report(&self, entries: &[ScoredProfile], _preferences: &Preferences) -> Result<String> {
        to_pretty(entries, "score report")
    }

    fn styles_report(&self, entries: &[ScoredProfile]) -> Result<String> {
        to_pretty(entries, "style listing")
    }

    fn presets_report(&self, presets: &[FocusPreset]) -> Result<String> {
        to_pretty(presets, "preset list")
    }

    fn preset_report(&self, preset: &FocusPreset) -> Result<String> {
        to_pretty(preset, "preset")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PRESETS, STYLES};
    use crate::scoring::score_catalog;
    use serde_json::Value;

    #[test]
    fn test_styles_report_fields() {
        let prefs = Preferences::new(9, 8, 5);
        let json = JsonReporter::new()
            .styles_report(&score_catalog(STYLES, &prefs))
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["key"], "aztec");
        assert_eq!(rows[0]["uxSpeed"], 0.55);
        assert_eq!(rows[0]["label"], "excellent");
        assert!((rows[0]["fitScore"].as_f64().unwrap() - 0.962).abs() < 1e-9);
    }

    #[test]
    fn test_preset_report_sorted_keys() {
        let json = JsonReporter::new().preset_report(&PRESETS[2]).unwrap();
        let keys: Vec<_> = json
            .lines()
            .filter_map(|l| l.trim().strip_prefix('"'))
            .filter_map(|l| l.split('"').next())
            .collect();
        assert_eq!(keys, vec!["description", "label", "name", "value"]);
    }
}
