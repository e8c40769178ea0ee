//! Presets command handler.

use crate::model::{FocusPreset, PRESETS};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::{reporter_for, RenderOptions, ReportFormat};
use anyhow::Result;

/// What to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetQuery {
    /// Every preset
    All,
    /// One preset by name
    Named(String),
}

/// Render presets without writing them.
///
/// Fails with [`crate::FocusError::UnknownPreset`] for a name that is not defined.
pub fn build_presets_report(query: &PresetQuery, format: ReportFormat) -> Result<String> {
    let reporter = reporter_for(format, RenderOptions::default());
    let report = match query {
        PresetQuery::All => reporter.presets_report(PRESETS)?,
        PresetQuery::Named(name) => reporter.preset_report(FocusPreset::lookup(name)?)?,
    };
    Ok(report)
}

/// Run the presets command, returning the desired exit code.
pub fn run_presets(query: &PresetQuery, format: ReportFormat) -> Result<i32> {
    let report = build_presets_report(query, format)?;
    write_output(&report, &OutputTarget::Stdout, false)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FocusError;

    #[test]
    fn test_unknown_preset_is_error() {
        let err = build_presets_report(&PresetQuery::Named("turbo".into()), ReportFormat::Table)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FocusError>(),
            Some(FocusError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn test_list_json() {
        let json = build_presets_report(&PresetQuery::All, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[2]["label"], "Max Focus");
    }
}
