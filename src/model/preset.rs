//! Named focus presets.

use crate::error::{FocusError, Result};
use serde::Serialize;

/// A named focus level on the 0-100 slider.
///
/// Field order is alphabetical so serialized output has sorted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusPreset {
    pub description: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    /// Focus value, 0-100
    pub value: u8,
}

impl FocusPreset {
    /// Look up a preset by name.
    pub fn lookup(name: &str) -> Result<&'static Self> {
        PRESETS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| FocusError::unknown_preset(name, PRESETS.iter().map(|p| p.name)))
    }
}

/// Built-in presets, in display order.
pub const PRESETS: &[FocusPreset] = &[
    FocusPreset {
        name: "chill",
        value: 20,
        label: "Chill",
        description: "Low focus / low risk — conservative interactions.",
    },
    FocusPreset {
        name: "balanced",
        value: 50,
        label: "Balanced",
        description: "Middle of the road — default for most users.",
    },
    FocusPreset {
        name: "max",
        value: 90,
        label: "Max Focus",
        description: "High focus / aggressive behavior — use with care.",
    },
];
