//! Env command handler.

use crate::checks::{check_process_env, EnvReport};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;

/// Format an environment report as human-readable text.
#[must_use]
pub fn format_env_report(report: &EnvReport) -> String {
    let mut lines = vec!["=== Checking environment variables ===".to_string()];
    for var in &report.vars {
        if var.present {
            lines.push(format!("[OK] {} is set", var.name));
        } else {
            lines.push(format!("[!!] {} is NOT set", var.name));
        }
    }
    lines.push(String::new());
    lines.push("=== RESULT ===".to_string());
    lines.push(if report.all_present() {
        "Environment looks good".to_string()
    } else {
        "Some checks FAILED".to_string()
    });
    lines.join("\n")
}

/// Run the env command, returning the desired exit code.
pub fn run_env(required_vars: &[String], format: ReportFormat) -> Result<i32> {
    let report = check_process_env(required_vars);
    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }

    let text = match format {
        ReportFormat::Table => format_env_report(&report),
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    write_output(&text, &OutputTarget::Stdout, false)?;

    if report.all_present() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::CHECK_FAILED)
    }
}
