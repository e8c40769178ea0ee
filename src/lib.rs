//! **Score Web3 stack styles against what you care about.**
//!
//! `web3-focus-slider` takes three importance ratings, privacy, soundness and
//! UX speed, each on a 0-10 scale, and scores them against a fixed catalog of
//! Web3 stack styles (Aztec-style zk rollups, Zama-style FHE, soundness-first
//! protocols). Each style carries its own 0-1 emphasis on the same three
//! dimensions.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the built-in [`StyleProfile`] and [`FocusPreset`] catalogs.
//! - **[`scoring`]**: [`compute_fit`], [`classify`] and [`rank_catalog`]. Pure
//!   functions with no I/O; out-of-range input is clamped, never rejected.
//! - **[`reports`]**: table and JSON renderers.
//! - **[`checks`]**: environment-variable presence and JSON file inspection.
//! - **[`config`]**: YAML config file discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use web3_focus_slider::{compute_fit, classify, FitLabel, StyleProfile};
//!
//! let aztec = StyleProfile::find("aztec").expect("built-in style");
//! let fit = compute_fit(aztec, 9, 8, 5);
//!
//! assert!((fit - 0.962).abs() < 1e-9);
//! assert_eq!(classify(fit), FitLabel::Excellent);
//! ```
//!
//! ### Ranking the catalog
//!
//! Numeric sort fields order by the style's own emphasis, not by fit; the fit
//! for your preferences rides along on every entry.
//!
//! ```
//! use web3_focus_slider::{rank_catalog, Preferences, SortField, STYLES};
//!
//! let ranking = rank_catalog(STYLES, &Preferences::new(8, 7, 6), SortField::Soundness, true, 0);
//! let keys: Vec<_> = ranking.entries.iter().map(|e| e.profile.key).collect();
//! assert_eq!(keys, ["soundness", "zama", "aztec"]);
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    // Score-to-bar-width and byte-count casts are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

pub use config::{AppConfig, ConfigError, Validatable};
pub use error::{ErrorContext, FocusError, Result};
pub use model::{FocusPreset, StyleProfile, PRESETS, STYLES};
pub use reports::{ReportFormat, Reporter};
pub use scoring::{
    classify, clamp, compute_fit, rank_catalog, FitLabel, Preferences, RankWarning, Ranking,
    ScoredProfile, SortField,
};
