//! Web3 stack style profiles.

use serde::Serialize;

/// A Web3 stack style with its inherent emphasis on each dimension.
///
/// All three emphasis values lie in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Short identifier, unique within the catalog
    pub key: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub privacy: f64,
    pub soundness: f64,
    pub ux_speed: f64,
    /// Free-text description
    pub note: &'static str,
}

impl StyleProfile {
    /// Look up a profile in the built-in catalog by key.
    #[must_use]
    pub fn find(key: &str) -> Option<&'static Self> {
        STYLES.iter().find(|s| s.key == key)
    }
}

/// Built-in style catalog, in report order.
pub const STYLES: &[StyleProfile] = &[
    StyleProfile {
        key: "aztec",
        name: "Aztec-style zk rollup",
        privacy: 0.95,
        soundness: 0.82,
        ux_speed: 0.55,
        note: "Encrypted balances and zk circuits; strong privacy, heavier UX.",
    },
    StyleProfile {
        key: "zama",
        name: "Zama-style FHE stack",
        privacy: 0.92,
        soundness: 0.86,
        ux_speed: 0.40,
        note: "Fully homomorphic encrypted compute; max privacy, slower UX.",
    },
    StyleProfile {
        key: "soundness",
        name: "Soundness-first protocol",
        privacy: 0.55,
        soundness: 0.98,
        ux_speed: 0.72,
        note: "Formal specs and proofs; very strong correctness, decent UX.",
    },
];
