//! Check-json command handler.
//!
//! Implements the `check-json` subcommand for inspecting a local JSON file.

use crate::checks::{inspect_json_file, Inspection, LISTED_KEYS};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Exit code for an inspection outcome.
#[must_use]
pub const fn inspection_exit_code(inspection: &Inspection) -> i32 {
    match inspection {
        Inspection::Valid { .. } => exit_codes::SUCCESS,
        Inspection::Invalid { .. } => exit_codes::INVALID_DOCUMENT,
    }
}

/// Format an inspection as human-readable text.
#[must_use]
pub fn format_inspection(path: &Path, inspection: &Inspection) -> String {
    let mut lines = vec![format!("=== Checking JSON file: {} ===", path.display())];

    match inspection {
        Inspection::Invalid {
            size_bytes,
            message,
        } => {
            lines.push(format!("File size: {size_bytes} bytes"));
            lines.push(format!("[!!] Invalid JSON: {message}"));
        }
        Inspection::Valid {
            size_bytes,
            summary,
        } => {
            lines.push(format!("File size: {size_bytes} bytes"));
            lines.push("[OK] JSON is valid.".to_string());
            lines.push(format!("Top-level type: {}", summary.kind.name()));
            if let Some(count) = summary.key_count {
                lines.push(format!("Number of keys: {count}"));
                let more = if count > LISTED_KEYS { " …" } else { "" };
                lines.push(format!("Keys: {}{more}", summary.keys.join(", ")));
            }
            if let Some(count) = summary.item_count {
                lines.push(format!("Number of items: {count}"));
            }
            lines.push(String::new());
            lines.push("Preview:".to_string());
            lines.push(summary.preview.clone());
            if summary.truncated {
                lines.push("… (truncated)".to_string());
            }
        }
    }

    lines.join("\n")
}

/// Run the check-json command, returning the desired exit code.
pub fn run_check_json(path: &Path, format: ReportFormat) -> Result<i32> {
    let inspection = match inspect_json_file(path) {
        Ok(inspection) => inspection,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(exit_codes::CHECK_FAILED);
        }
    };

    let report = match format {
        ReportFormat::Table => format_inspection(path, &inspection),
        ReportFormat::Json => serde_json::to_string_pretty(&json!({
            "file": path.display().to_string(),
            "inspection": inspection,
        }))?,
    };
    write_output(&report, &OutputTarget::Stdout, false)?;

    Ok(inspection_exit_code(&inspection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::inspect_json_bytes;

    #[test]
    fn test_format_valid_object() {
        let inspection = inspect_json_bytes(br#"{"name": "zama", "fhe": true}"#);
        let text = format_inspection(Path::new("doc.json"), &inspection);

        assert!(text.starts_with("=== Checking JSON file: doc.json ==="));
        assert!(text.contains("[OK] JSON is valid."));
        assert!(text.contains("Top-level type: object"));
        assert!(text.contains("Number of keys: 2"));
        assert!(text.contains("Keys: name, fhe"));
        assert!(!text.contains("(truncated)"));
        assert_eq!(inspection_exit_code(&inspection), exit_codes::SUCCESS);
    }

    #[test]
    fn test_format_invalid() {
        let inspection = inspect_json_bytes(b"[1, 2");
        let text = format_inspection(Path::new("broken.json"), &inspection);

        assert!(text.contains("[!!] Invalid JSON:"));
        assert_eq!(
            inspection_exit_code(&inspection),
            exit_codes::INVALID_DOCUMENT
        );
    }

    #[test]
    fn test_missing_file_exit_code() {
        let code = run_check_json(Path::new("/nonexistent/doc.json"), ReportFormat::Table).unwrap();
        assert_eq!(code, exit_codes::CHECK_FAILED);
    }
}
