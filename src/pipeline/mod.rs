//! Shared plumbing for CLI command handlers.

mod output;

pub use output::{should_use_color, write_output, OutputTarget};

/// Exit codes for scripting and CI integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A check failed (missing environment variables, file not found)
    pub const CHECK_FAILED: i32 = 1;
    /// The inspected document is not valid JSON
    pub const INVALID_DOCUMENT: i32 = 2;
    /// An unexpected error occurred
    pub const ERROR: i32 = 3;
}
