//! End-to-end report rendering tests.
//!
//! Drive the command handlers with color disabled and check the text and
//! JSON they would write.

use std::io::Write;
use tempfile::NamedTempFile;
use web3_focus_slider::{
    checks::{inspect_json_file, Inspection},
    cli::{self, PresetQuery, ScoreConfig, StylesConfig},
    pipeline::exit_codes,
    rank_catalog,
    reports::{RenderOptions, Reporter, TableReporter},
    Preferences, ReportFormat, SortField, STYLES,
};

fn styles_config(format: ReportFormat) -> StylesConfig {
    StylesConfig {
        preferences: Preferences::new(9, 8, 5),
        sort_by: SortField::Key,
        ascending: false,
        limit: 0,
        format,
        output_file: None,
        no_color: true,
        quiet: true,
    }
}

fn score_config(format: ReportFormat) -> ScoreConfig {
    ScoreConfig {
        preferences: Preferences::new(9, 8, 5),
        format,
        output_file: None,
        unicode: false,
        no_color: true,
        quiet: true,
    }
}

#[test]
fn styles_table_snapshot() {
    let report = cli::build_styles_report(&styles_config(ReportFormat::Table), false)
        .expect("styles report renders");

    insta::assert_snapshot!(report, @r"
    web3_focus_slider – style profiles

    Key        Name                        Privacy  Soundness    Speed    Fit Label
    -------------------------------------------------------------------------------
    aztec      Aztec-style zk rollup          0.95       0.82     0.55   0.96 excellent
    soundness  Soundness-first protocol       0.55       0.98     0.72   0.75 good
    zama       Zama-style FHE stack           0.92       0.86     0.40   0.94 excellent
    ");
}

#[test]
fn styles_table_respects_limit() {
    let mut config = styles_config(ReportFormat::Table);
    config.sort_by = SortField::Privacy;
    config.limit = 1;

    let report = cli::build_styles_report(&config, false).expect("styles report renders");
    assert!(report.contains("aztec"));
    assert!(!report.contains("zama"));
    assert!(!report.contains("soundness  "));
}

#[test]
fn styles_json_is_machine_readable() {
    let mut config = styles_config(ReportFormat::Json);
    config.sort_by = SortField::Soundness;

    let report = cli::build_styles_report(&config, false).expect("styles report renders");
    let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    let rows = value.as_array().expect("array of styles");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["key"], "soundness");
    assert_eq!(rows[0]["uxSpeed"], 0.72);
    assert!(rows[0]["fitScore"].is_f64());
    assert_eq!(rows[2]["key"], "aztec");
    assert_eq!(rows[2]["label"], "excellent");
}

#[test]
fn empty_catalog_renders_placeholder() {
    let ranking = rank_catalog(&[], &Preferences::new(5, 5, 5), SortField::Key, true, 0);
    let report = TableReporter::new(RenderOptions::default())
        .styles_report(&ranking.entries)
        .expect("empty report renders");
    assert_eq!(report, "No styles defined.");
}

#[test]
fn score_report_lists_every_profile_in_catalog_order() {
    let report =
        cli::build_score_report(&score_config(ReportFormat::Table), false).expect("renders");

    assert!(report.starts_with("web3_focus_slider\n"));
    assert!(report.contains("Needs -> privacy: 9/10, soundness: 8/10, UX speed: 5/10"));
    assert!(report.contains("(aztec): 0.962 [excellent]"));
    assert!(report.contains("(zama): 0.944 [excellent]"));
    assert!(report.contains("Best fit: Aztec-style zk rollup (aztec) at 0.962"));

    let aztec = report.find("(aztec)").expect("aztec listed");
    let zama = report.find("(zama)").expect("zama listed");
    let soundness = report.find("(soundness)").expect("soundness listed");
    assert!(aztec < zama && zama < soundness);
    assert!(!report.contains('█'), "ASCII mode must not emit block bars");
}

#[test]
fn score_report_clamps_out_of_range_preferences() {
    let mut config = score_config(ReportFormat::Table);
    config.preferences = Preferences::new(42, -3, 10);

    let report = cli::build_score_report(&config, false).expect("renders");
    assert!(report.contains("Needs -> privacy: 10/10, soundness: 0/10, UX speed: 10/10"));
}

#[test]
fn score_json_is_catalog_ordered_array() {
    let report =
        cli::build_score_report(&score_config(ReportFormat::Json), false).expect("renders");
    let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");

    let profiles = value.as_array().expect("array of profiles");
    assert_eq!(profiles.len(), STYLES.len());
    assert_eq!(profiles[0]["key"], "aztec");
    assert_eq!(profiles[1]["key"], "zama");
    assert_eq!(profiles[2]["label"], "good");
}

#[test]
fn unknown_preset_lists_choices() {
    let err = cli::build_presets_report(&PresetQuery::Named("turbo".into()), ReportFormat::Table)
        .expect_err("unknown preset is an error");
    let message = err.to_string();
    assert!(message.contains("turbo"));
    assert!(message.contains("balanced"));
}

#[test]
fn check_json_reports_valid_and_invalid_files() {
    let mut good = NamedTempFile::new().expect("temp file");
    write!(good, r#"{{"rpc": "http://localhost:8545", "chains": [1, 10]}}"#).expect("write");
    let inspection = inspect_json_file(good.path()).expect("readable");
    assert!(matches!(inspection, Inspection::Valid { .. }));
    assert_eq!(cli::inspection_exit_code(&inspection), exit_codes::SUCCESS);

    let mut bad = NamedTempFile::new().expect("temp file");
    write!(bad, "{{not json").expect("write");
    let inspection = inspect_json_file(bad.path()).expect("readable");
    assert!(matches!(inspection, Inspection::Invalid { .. }));
    assert_eq!(
        cli::inspection_exit_code(&inspection),
        exit_codes::INVALID_DOCUMENT
    );
}
