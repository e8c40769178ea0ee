//! Fit scoring and catalog ranking.
//!
//! Everything here is pure: no I/O, no logging, no environment access.
//! Out-of-range preferences are clamped, never rejected, and the one
//! caller-visible problem (a negative limit) comes back as a
//! [`RankWarning`] for the presentation layer to report.
//!
//! # Usage
//!
//! ```
//! use web3_focus_slider::model::STYLES;
//! use web3_focus_slider::scoring::{rank_catalog, FitLabel, Preferences, SortField};
//!
//! let prefs = Preferences::new(9, 8, 5);
//! let ranking = rank_catalog(STYLES, &prefs, SortField::Privacy, true, 1);
//!
//! let top = &ranking.entries[0];
//! assert_eq!(top.profile.key, "aztec");
//! assert_eq!(top.label, FitLabel::Excellent);
//! ```

mod fit;
mod label;
mod rank;

pub use fit::{
    clamp, compute_fit, normalize, OutOfRange, Preferences, PREFERENCE_MAX, PRIVACY_WEIGHT,
    SOUNDNESS_WEIGHT, SPEED_WEIGHT,
};
pub use label::{classify, FitLabel, EXCELLENT_MIN, GOOD_MIN, OK_MIN};
pub use rank::{best_fit, rank_catalog, score_catalog, RankWarning, Ranking, ScoredProfile, SortField};
