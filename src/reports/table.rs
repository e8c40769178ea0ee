//! Plain-text reporter for terminal output.

use super::{RenderOptions, ReportFormat, Reporter};
use crate::error::Result;
use crate::model::FocusPreset;
use crate::scoring::{best_fit, FitLabel, Preferences, ScoredProfile};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the fit bar at a score of 1.0.
const BAR_WIDTH: f64 = 18.0;
/// Display width of the name column in the styles table.
const NAME_COLUMN: usize = 26;
/// Display width of the name column in the score report.
const SCORE_NAME_COLUMN: usize = 24;

fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Truncate `text` to at most `width` display columns.
fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Left-align `text` in a column `width` display columns wide.
fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Terminal table reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TableReporter {
    options: RenderOptions,
}

impl TableReporter {
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn title(&self) -> &'static str {
        if self.options.unicode {
            "🎚  web3_focus_slider"
        } else {
            "web3_focus_slider"
        }
    }

    fn bar(&self, score: f64) -> String {
        let cells = (score * BAR_WIDTH).floor() as usize;
        let glyph = if self.options.unicode { "█" } else { "#" };
        glyph.repeat(cells)
    }

    fn label(&self, label: FitLabel) -> String {
        let color = match label {
            FitLabel::Excellent => "green",
            FitLabel::Good | FitLabel::Ok => "yellow",
            FitLabel::Weak => "red",
        };
        ansi_color(label.as_str(), color, self.options.color)
    }
}

impl Reporter for TableReporter {
    fn score_report(&self, entries: &[ScoredProfile], preferences: &Preferences) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(ansi_color(self.title(), "bold", self.options.color));
        lines.push(format!(
            "Needs -> privacy: {}/10, soundness: {}/10, UX speed: {}/10",
            preferences.privacy, preferences.soundness, preferences.speed
        ));
        lines.push(String::new());
        lines.push("Profiles:".to_string());

        for entry in entries {
            let profile = &entry.profile;
            lines.push(format!(
                "- {} ({}): {:.3} [{}] {}",
                pad_to_width(profile.name, SCORE_NAME_COLUMN),
                profile.key,
                entry.fit_score,
                self.label(entry.label),
                self.bar(entry.fit_score)
            ));
            lines.push(format!("  {}", profile.note));
            lines.push("-".repeat(40));
        }
        lines.push(String::new());

        if let Some(best) = best_fit(entries) {
            lines.push(format!(
                "Best fit: {} ({}) at {:.3}",
                best.profile.name, best.profile.key, best.fit_score
            ));
        }

        Ok(lines.join("\n"))
    }

    fn styles_report(&self, entries: &[ScoredProfile]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No styles defined.".to_string());
        }

        let header = format!(
            "{:<10} {} {:>8} {:>10} {:>8} {:>6} {}",
            "Key",
            pad_to_width("Name", NAME_COLUMN),
            "Privacy",
            "Soundness",
            "Speed",
            "Fit",
            "Label"
        );

        let rule = "-".repeat(header.width());
        let mut lines = vec![
            "web3_focus_slider – style profiles".to_string(),
            String::new(),
            header,
            rule,
        ];

        for entry in entries {
            let profile = &entry.profile;
            lines.push(format!(
                "{:<10} {} {:>8.2} {:>10.2} {:>8.2} {:>6.2} {}",
                profile.key,
                pad_to_width(truncate_to_width(profile.name, NAME_COLUMN), NAME_COLUMN),
                profile.privacy,
                profile.soundness,
                profile.ux_speed,
                entry.fit_score,
                self.label(entry.label)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn presets_report(&self, presets: &[FocusPreset]) -> Result<String> {
        let mut lines = vec!["Available focus presets:".to_string()];
        for preset in presets {
            lines.push(format!(
                " - {:<8} ({:>3}): {}",
                preset.name, preset.value, preset.label
            ));
            lines.push(format!("     {}", preset.description));
        }
        Ok(lines.join("\n"))
    }

    fn preset_report(&self, preset: &FocusPreset) -> Result<String> {
        Ok([
            format!("Preset: {}", preset.name),
            format!("  Label      : {}", preset.label),
            format!("  Focus value: {}", preset.value),
            format!("  Description: {}", preset.description),
        ]
        .join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}
