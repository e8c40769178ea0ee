#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the JSON file inspector.
///
/// Arbitrary bytes must always yield an inspection, valid or invalid,
/// and never panic while building the preview or key listing.
fuzz_target!(|data: &[u8]| {
    let inspection = web3_focus_slider::checks::inspect_json_bytes(data);
    let _ = web3_focus_slider::cli::format_inspection(std::path::Path::new("fuzz.json"), &inspection);
});
