//! Fixed catalogs the tool scores against.
//!
//! Both catalogs are `'static` constant slices: built at compile time, never
//! mutated, and safe to share between any number of callers.

mod preset;
mod style;

pub use preset::{FocusPreset, PRESETS};
pub use style::{StyleProfile, STYLES};
