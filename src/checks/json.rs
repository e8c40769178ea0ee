//! Structural inspection of JSON documents.

use crate::error::{FocusError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Number of characters kept in the pretty-printed preview.
pub const PREVIEW_CHARS: usize = 300;
/// Number of object keys listed in a summary.
pub const LISTED_KEYS: usize = 10;

/// Top-level JSON value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// Summary of a valid JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonSummary {
    pub kind: JsonKind,
    /// Number of top-level keys (objects only)
    pub key_count: Option<usize>,
    /// First [`LISTED_KEYS`] keys in document order (objects only)
    pub keys: Vec<String>,
    /// Number of items (arrays only)
    pub item_count: Option<usize>,
    /// Pretty-printed document, cut at [`PREVIEW_CHARS`] characters
    pub preview: String,
    /// Whether `preview` was cut
    pub truncated: bool,
}

/// Result of inspecting a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Inspection {
    Valid {
        size_bytes: u64,
        #[serde(flatten)]
        summary: JsonSummary,
    },
    Invalid {
        size_bytes: u64,
        message: String,
    },
}

/// Inspect an in-memory document. Never fails: invalid input yields
/// [`Inspection::Invalid`].
#[must_use]
pub fn inspect_json_bytes(bytes: &[u8]) -> Inspection {
    let size_bytes = bytes.len() as u64;
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => Inspection::Valid {
            size_bytes,
            summary: summarize(&value),
        },
        Err(e) => Inspection::Invalid {
            size_bytes,
            message: e.to_string(),
        },
    }
}

/// Inspect a document on disk.
///
/// Only a missing or unreadable file is an error; malformed content is
/// reported as [`Inspection::Invalid`].
pub fn inspect_json_file(path: &Path) -> Result<Inspection> {
    if !path.is_file() {
        return Err(FocusError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        ));
    }
    let bytes = std::fs::read(path).map_err(|e| FocusError::io(path, e))?;
    Ok(inspect_json_bytes(&bytes))
}

fn summarize(value: &Value) -> JsonSummary {
    let (key_count, keys) = match value {
        Value::Object(map) => (
            Some(map.len()),
            map.keys().take(LISTED_KEYS).cloned().collect(),
        ),
        _ => (None, Vec::new()),
    };
    let item_count = value.as_array().map(Vec::len);

    let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
    let truncated = pretty.chars().count() > PREVIEW_CHARS;
    let preview = pretty.chars().take(PREVIEW_CHARS).collect();

    JsonSummary {
        kind: JsonKind::of(value),
        key_count,
        keys,
        item_count,
        preview,
        truncated,
    }
}
