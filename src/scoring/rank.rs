//! Catalog ranking and filtering.
//!
//! Numeric sort fields order by the profile's raw catalog attribute, not by
//! the computed fit: "which styles emphasize privacy most" is a different
//! question from "which styles fit my needs". Every entry still carries its
//! fit against the caller's preferences.

use super::fit::Preferences;
use super::label::FitLabel;
use crate::model::StyleProfile;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field used to order a ranking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Catalog key, always ascending
    #[default]
    Key,
    /// Raw privacy emphasis
    Privacy,
    /// Raw soundness emphasis
    Soundness,
    /// Raw UX speed emphasis
    Speed,
}

impl SortField {
    /// The profile attribute this field sorts on, `None` for the key.
    fn value(self, profile: &StyleProfile) -> Option<f64> {
        match self {
            Self::Key => None,
            Self::Privacy => Some(profile.privacy),
            Self::Soundness => Some(profile.soundness),
            Self::Speed => Some(profile.ux_speed),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Privacy => write!(f, "privacy"),
            Self::Soundness => write!(f, "soundness"),
            Self::Speed => write!(f, "speed"),
        }
    }
}

/// A style profile scored against one set of preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: StyleProfile,
    pub fit_score: f64,
    pub label: FitLabel,
}

impl ScoredProfile {
    #[must_use]
    pub fn new(profile: StyleProfile, preferences: &Preferences) -> Self {
        let fit_score = preferences.fit(&profile);
        Self {
            profile,
            fit_score,
            label: FitLabel::from_score(fit_score),
        }
    }
}

/// Non-fatal problem with a ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankWarning {
    /// A negative limit was ignored
    NegativeLimit(i64),
}

impl std::fmt::Display for RankWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeLimit(limit) => {
                write!(f, "limit {limit} is negative; ignoring")
            }
        }
    }
}

/// Ordered result of [`rank_catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub entries: Vec<ScoredProfile>,
    pub warnings: Vec<RankWarning>,
}

/// Score every profile in catalog order.
#[must_use]
pub fn score_catalog(catalog: &[StyleProfile], preferences: &Preferences) -> Vec<ScoredProfile> {
    catalog
        .iter()
        .map(|profile| ScoredProfile::new(*profile, preferences))
        .collect()
}

/// Score, sort and truncate the catalog.
///
/// `descending` only applies to numeric fields; [`SortField::Key`] is always
/// ascending. Numeric ties break by key ascending. A positive `limit` keeps the
/// first `limit` entries, zero keeps all, and a negative limit keeps all and
/// reports a [`RankWarning::NegativeLimit`].
#[must_use]
pub fn rank_catalog(
    catalog: &[StyleProfile],
    preferences: &Preferences,
    sort_field: SortField,
    descending: bool,
    limit: i64,
) -> Ranking {
    let mut entries = score_catalog(catalog, preferences);
    entries.sort_by(|a, b| compare(&a.profile, &b.profile, sort_field, descending));

    let mut warnings = Vec::new();
    if limit < 0 {
        warnings.push(RankWarning::NegativeLimit(limit));
    } else if limit > 0 {
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    Ranking { entries, warnings }
}

fn compare(a: &StyleProfile, b: &StyleProfile, field: SortField, descending: bool) -> Ordering {
    let by_key = a.key.cmp(b.key);
    match (field.value(a), field.value(b)) {
        (Some(va), Some(vb)) => {
            // Adding 0.0 folds -0.0 into 0.0 so equal values reach the key tie-break.
            let ord = (va + 0.0).total_cmp(&(vb + 0.0));
            let ord = if descending { ord.reverse() } else { ord };
            ord.then(by_key)
        }
        _ => by_key,
    }
}

/// Highest-fitting entry; ties go to the lexically smallest key.
#[must_use]
pub fn best_fit(entries: &[ScoredProfile]) -> Option<&ScoredProfile> {
    entries.iter().min_by(|a, b| {
        b.fit_score
            .total_cmp(&a.fit_score)
            .then(a.profile.key.cmp(b.profile.key))
    })
}
