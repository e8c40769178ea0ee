//! Weighted-distance fit between caller preferences and a style profile.

use crate::model::StyleProfile;

/// Weight of the soundness match term.
pub const SOUNDNESS_WEIGHT: f64 = 0.40;
/// Weight of the privacy match term.
pub const PRIVACY_WEIGHT: f64 = 0.35;
/// Weight of the UX speed match term.
pub const SPEED_WEIGHT: f64 = 0.25;

/// Upper end of the preference scale.
pub const PREFERENCE_MAX: i64 = 10;

/// Saturating clamp of `x` into `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics; callers always pass `lo <= hi`.
#[must_use]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Map a 0-10 preference to `[0, 1]`, saturating out-of-range input.
#[must_use]
pub fn normalize(value: i64) -> f64 {
    clamp(value as f64 / PREFERENCE_MAX as f64, 0.0, 1.0)
}

/// Closeness of a normalized preference to a profile emphasis, `1 - |a - b|`.
fn match_term(preference: f64, emphasis: f64) -> f64 {
    1.0 - (preference - emphasis).abs()
}

/// Compute the fit score (0-1) of `profile` for the given preferences.
///
/// Total over all integers: out-of-range preferences degrade to the nearest
/// boundary instead of failing.
#[must_use]
pub fn compute_fit(profile: &StyleProfile, privacy: i64, soundness: i64, speed: i64) -> f64 {
    let m_priv = match_term(normalize(privacy), profile.privacy);
    let m_snd = match_term(normalize(soundness), profile.soundness);
    let m_spd = match_term(normalize(speed), profile.ux_speed);

    clamp(
        SOUNDNESS_WEIGHT * m_snd + PRIVACY_WEIGHT * m_priv + SPEED_WEIGHT * m_spd,
        0.0,
        1.0,
    )
}

/// One caller's importance ratings, each nominally 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preferences {
    pub privacy: i64,
    pub soundness: i64,
    pub speed: i64,
}

/// A preference that fell outside `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// Which preference, named as on the command line
    pub field: &'static str,
    pub value: i64,
}

impl Preferences {
    #[must_use]
    pub const fn new(privacy: i64, soundness: i64, speed: i64) -> Self {
        Self {
            privacy,
            soundness,
            speed,
        }
    }

    /// Fit score of `profile` for these preferences.
    #[must_use]
    pub fn fit(&self, profile: &StyleProfile) -> f64 {
        compute_fit(profile, self.privacy, self.soundness, self.speed)
    }

    /// Values outside the 0-10 scale, in privacy/soundness/speed order.
    #[must_use]
    pub fn out_of_range(&self) -> Vec<OutOfRange> {
        [
            ("privacy", self.privacy),
            ("soundness", self.soundness),
            ("speed", self.speed),
        ]
        .into_iter()
        .filter(|(_, v)| !(0..=PREFERENCE_MAX).contains(v))
        .map(|(field, value)| OutOfRange { field, value })
        .collect()
    }

    /// Copy with every value saturated into the 0-10 scale.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let sat = |v: i64| v.clamp(0, PREFERENCE_MAX);
        Self::new(sat(self.privacy), sat(self.soundness), sat(self.speed))
    }
}
