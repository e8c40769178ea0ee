//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler resolves its
//! inputs, calls into the library, writes the report, and returns the exit
//! code for the caller to apply.

mod check_json;
mod env;
mod presets;
mod score;
mod styles;

pub use check_json::{format_inspection, inspection_exit_code, run_check_json};
pub use env::{format_env_report, run_env};
pub use presets::{build_presets_report, run_presets, PresetQuery};
pub use score::{build_score_report, run_score, ScoreConfig};
pub use styles::{build_styles_report, run_styles, StylesConfig};
