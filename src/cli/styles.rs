//! Styles command handler.
//!
//! Implements the `styles` subcommand: the raw catalog, sorted and truncated,
//! with each row's fit against the caller's preferences.

use super::score::clamp_with_warnings;
use crate::model::STYLES;
use crate::pipeline::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{reporter_for, RenderOptions, ReportFormat};
use crate::scoring::{rank_catalog, Preferences, SortField};
use anyhow::Result;
use std::path::PathBuf;

/// Styles command configuration
#[derive(Debug, Clone)]
pub struct StylesConfig {
    pub preferences: Preferences,
    pub sort_by: SortField,
    /// Lowest first for numeric fields; ignored for the key
    pub ascending: bool,
    /// Rows to keep after sorting, 0 for all
    pub limit: i64,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Render the styles listing without writing it.
pub fn build_styles_report(config: &StylesConfig, color: bool) -> Result<String> {
    let preferences = clamp_with_warnings(&config.preferences);

    if config.ascending && config.sort_by == SortField::Key {
        tracing::debug!("--ascending has no effect when sorting by key");
    }

    let ranking = rank_catalog(
        STYLES,
        &preferences,
        config.sort_by,
        !config.ascending,
        config.limit,
    );
    for warning in &ranking.warnings {
        tracing::warn!("{warning}");
    }

    let options = RenderOptions {
        unicode: true,
        color,
    };
    Ok(reporter_for(config.format, options).styles_report(&ranking.entries)?)
}

/// Run the styles command, returning the desired exit code.
pub fn run_styles(config: StylesConfig) -> Result<i32> {
    let target = OutputTarget::from_option(config.output_file.clone());
    let color = should_use_color(config.no_color, &target);

    let report = build_styles_report(&config, color)?;
    write_output(&report, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}
