//! Integration tests for catalog scoring and ranking.

use web3_focus_slider::{
    classify, compute_fit, rank_catalog, scoring::best_fit, FitLabel, Preferences, RankWarning,
    SortField, StyleProfile, STYLES,
};

fn keys(prefs: &Preferences, field: SortField, descending: bool, limit: i64) -> Vec<&'static str> {
    rank_catalog(STYLES, prefs, field, descending, limit)
        .entries
        .iter()
        .map(|e| e.profile.key)
        .collect()
}

fn profile(key: &'static str, privacy: f64, soundness: f64, ux_speed: f64) -> StyleProfile {
    StyleProfile {
        key,
        name: key,
        privacy,
        soundness,
        ux_speed,
        note: "",
    }
}

// ============================================================================
// Fit Scoring
// ============================================================================

mod fit_tests {
    use super::*;

    #[test]
    fn test_worked_example_is_excellent() {
        let aztec = StyleProfile::find("aztec").expect("aztec is built in");
        let fit = compute_fit(aztec, 9, 8, 5);
        assert!((fit - 0.962).abs() < 1e-9, "got {fit}");
        assert_eq!(classify(fit), FitLabel::Excellent);
    }

    #[test]
    fn test_zero_preferences_follow_formula() {
        for style in STYLES {
            let expected = (0.40 * (1.0 - style.soundness)
                + 0.35 * (1.0 - style.privacy)
                + 0.25 * (1.0 - style.ux_speed))
                .clamp(0.0, 1.0);
            assert!((compute_fit(style, 0, 0, 0) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_of_range_preferences_clamp() {
        for style in STYLES {
            assert_eq!(
                compute_fit(style, -50, 400, 11),
                compute_fit(style, 0, 10, 10)
            );
        }
    }

    #[test]
    fn test_privacy_extremes_match_terms() {
        // Only privacy differs, so the fit gap is the full privacy weight.
        let full = profile("p", 1.0, 0.5, 0.5);
        let gap = compute_fit(&full, 10, 5, 5) - compute_fit(&full, 0, 5, 5);
        assert!((gap - 0.35).abs() < 1e-12);
        assert!((compute_fit(&full, 10, 5, 5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(0.80), FitLabel::Excellent);
        assert_eq!(classify(0.7999), FitLabel::Good);
        assert_eq!(classify(0.65), FitLabel::Good);
        assert_eq!(classify(0.50), FitLabel::Ok);
        assert_eq!(classify(0.4999), FitLabel::Weak);
    }
}

// ============================================================================
// Ranking
// ============================================================================

mod rank_tests {
    use super::*;

    #[test]
    fn test_key_sort_ignores_direction() {
        let prefs = Preferences::new(8, 7, 6);
        let expected = vec!["aztec", "soundness", "zama"];
        assert_eq!(keys(&prefs, SortField::Key, true, 0), expected);
        assert_eq!(keys(&prefs, SortField::Key, false, 0), expected);
    }

    #[test]
    fn test_numeric_sorts_use_raw_attribute() {
        let prefs = Preferences::new(0, 0, 10);
        assert_eq!(
            keys(&prefs, SortField::Privacy, true, 0),
            ["aztec", "zama", "soundness"]
        );
        assert_eq!(
            keys(&prefs, SortField::Speed, true, 0),
            ["soundness", "aztec", "zama"]
        );
        assert_eq!(
            keys(&prefs, SortField::Speed, false, 0),
            ["zama", "aztec", "soundness"]
        );
    }

    #[test]
    fn test_ties_break_by_ascending_key() {
        let catalog = [
            profile("charlie", 0.5, 0.9, 0.1),
            profile("alpha", 0.5, 0.2, 0.3),
            profile("bravo", 0.7, 0.4, 0.3),
        ];
        let prefs = Preferences::new(5, 5, 5);

        for descending in [true, false] {
            let ranked = rank_catalog(&catalog, &prefs, SortField::Privacy, descending, 0);
            let order: Vec<_> = ranked.entries.iter().map(|e| e.profile.key).collect();
            if descending {
                assert_eq!(order, ["bravo", "alpha", "charlie"]);
            } else {
                assert_eq!(order, ["alpha", "charlie", "bravo"]);
            }
        }
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let prefs = Preferences::new(8, 7, 6);
        assert_eq!(keys(&prefs, SortField::Soundness, true, 1), ["soundness"]);
        assert_eq!(keys(&prefs, SortField::Soundness, true, 2).len(), 2);
        assert_eq!(keys(&prefs, SortField::Soundness, true, 0).len(), 3);
        assert_eq!(keys(&prefs, SortField::Soundness, true, 99).len(), 3);
    }

    #[test]
    fn test_negative_limit_warns_and_keeps_everything() {
        let ranked = rank_catalog(STYLES, &Preferences::new(8, 7, 6), SortField::Key, true, -1);
        assert_eq!(ranked.entries.len(), STYLES.len());
        assert_eq!(ranked.warnings, vec![RankWarning::NegativeLimit(-1)]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let prefs = Preferences::new(3, 9, 1);
        let first = rank_catalog(STYLES, &prefs, SortField::Speed, false, 2);
        let second = rank_catalog(STYLES, &prefs, SortField::Speed, false, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_rides_along_with_every_entry() {
        let prefs = Preferences::new(9, 8, 5);
        let ranked = rank_catalog(STYLES, &prefs, SortField::Key, true, 0);
        for entry in &ranked.entries {
            assert_eq!(entry.fit_score, compute_fit(&entry.profile, 9, 8, 5));
            assert_eq!(entry.label, classify(entry.fit_score));
        }
        let best = best_fit(&ranked.entries).expect("catalog is not empty");
        assert_eq!(best.profile.key, "aztec");
    }
}
