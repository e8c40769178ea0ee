//! Local environment and file checks used by the companion commands.
//!
//! Nothing here touches the network.

mod env;
mod json;

pub use env::{check_env, check_process_env, is_placeholder_rpc_url, EnvReport, EnvVarStatus};
pub use json::{
    inspect_json_bytes, inspect_json_file, Inspection, JsonKind, JsonSummary, LISTED_KEYS,
    PREVIEW_CHARS,
};
