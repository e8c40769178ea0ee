//! Qualitative bands for fit scores.

use serde::{Deserialize, Serialize};

/// Lower bound of the `excellent` band.
pub const EXCELLENT_MIN: f64 = 0.80;
/// Lower bound of the `good` band.
pub const GOOD_MIN: f64 = 0.65;
/// Lower bound of the `ok` band.
pub const OK_MIN: f64 = 0.50;

/// Qualitative fit band, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitLabel {
    /// Below 0.50
    Weak,
    /// 0.50 up to 0.65
    Ok,
    /// 0.65 up to 0.80
    Good,
    /// 0.80 and above
    Excellent,
}

impl FitLabel {
    /// Band for a fit score. Lower bounds are inclusive.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_MIN {
            Self::Excellent
        } else if score >= GOOD_MIN {
            Self::Good
        } else if score >= OK_MIN {
            Self::Ok
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Ok => "ok",
            Self::Weak => "weak",
        }
    }
}

impl std::fmt::Display for FitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`FitLabel::from_score`].
#[must_use]
pub fn classify(score: f64) -> FitLabel {
    FitLabel::from_score(score)
}
