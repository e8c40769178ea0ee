//! Score command handler.
//!
//! Implements the `score` subcommand: every catalog profile scored against
//! the caller's preferences, in catalog order.

use crate::model::STYLES;
use crate::pipeline::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{reporter_for, RenderOptions, ReportFormat};
use crate::scoring::{score_catalog, Preferences};
use anyhow::Result;
use std::path::PathBuf;

/// Score command configuration
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub preferences: Preferences,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub unicode: bool,
    pub no_color: bool,
    pub quiet: bool,
}

/// Clamp preferences into 0-10, logging a warning for each value that moved.
pub(crate) fn clamp_with_warnings(preferences: &Preferences) -> Preferences {
    for bad in preferences.out_of_range() {
        tracing::warn!(
            "--{} {} is out of range, clamping to [0,10]",
            bad.field,
            bad.value
        );
    }
    preferences.clamped()
}

/// Render the score report without writing it.
pub fn build_score_report(config: &ScoreConfig, color: bool) -> Result<String> {
    let preferences = clamp_with_warnings(&config.preferences);
    let entries = score_catalog(STYLES, &preferences);
    tracing::debug!("Scored {} profiles against {:?}", entries.len(), preferences);

    let options = RenderOptions {
        unicode: config.unicode,
        color,
    };
    Ok(reporter_for(config.format, options).score_report(&entries, &preferences)?)
}

/// Run the score command, returning the desired exit code.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let target = OutputTarget::from_option(config.output_file.clone());
    let color = should_use_color(config.no_color, &target);

    let report = build_score_report(&config, color)?;
    write_output(&report, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}
