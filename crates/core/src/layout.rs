//! Layout document preparation.
//!
//! A saved layout is self-describing: before storage the incoming JSON
//! object is stamped with its generated `filename` and `savedAt` so the
//! stored blob can be handed back verbatim on load.

use chrono::{SecondsFormat, SubsecRound};
use serde_json::Value;

use crate::error::CoreError;
use crate::naming::layout_filename;
use crate::types::Timestamp;

/// Display label stored when the document carries no usable `name`.
pub const DEFAULT_LAYOUT_NAME: &str = "Untitled";

/// Maximum allowed length for a layout display label (matches `VARCHAR(100)`).
pub const MAX_LAYOUT_NAME_LENGTH: usize = 100;

/// Document key holding the generated filename.
pub const FILENAME_KEY: &str = "filename";

/// Document key holding the save instant.
pub const SAVED_AT_KEY: &str = "savedAt";

/// Metadata derived while stamping a layout document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampedLayout {
    pub filename: String,
    /// Display label for the `layouts.name` column.
    pub name: String,
    /// Save instant, truncated to milliseconds.
    pub saved_at: Timestamp,
}

impl StampedLayout {
    /// `savedAt` as written into the document and returned to the client.
    pub fn saved_at_string(&self) -> String {
        format_saved_at(self.saved_at)
    }
}

/// Render a save instant as RFC 3339 UTC with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_saved_at(at: Timestamp) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The document's own `name` as text.
///
/// Non-empty strings are used as-is; non-zero numbers and `true` use their
/// JSON text. Empty strings, `0`, `false`, `null`, arrays and objects count
/// as no name.
fn document_name(document: &serde_json::Map<String, Value>) -> Option<String> {
    match document.get("name")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

/// Generate a filename for `document`, stamp `filename` and `savedAt` into
/// it, and return the derived metadata.
///
/// The document must be a JSON object. Any existing `filename`/`savedAt`
/// keys are overwritten.
pub fn stamp_document(document: &mut Value, now: Timestamp) -> Result<StampedLayout, CoreError> {
    let Value::Object(fields) = document else {
        return Err(CoreError::Validation(
            "Layout document must be a JSON object".into(),
        ));
    };

    let saved_at = now.trunc_subsecs(3);
    let raw_name = document_name(fields);

    let name = raw_name
        .clone()
        .unwrap_or_else(|| DEFAULT_LAYOUT_NAME.to_string());
    let len = name.chars().count();
    if len > MAX_LAYOUT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Layout name must not exceed {MAX_LAYOUT_NAME_LENGTH} characters, got {len}"
        )));
    }

    let filename = layout_filename(raw_name.as_deref().unwrap_or_default(), saved_at);

    fields.insert(SAVED_AT_KEY.into(), Value::String(format_saved_at(saved_at)));
    fields.insert(FILENAME_KEY.into(), Value::String(filename.clone()));

    Ok(StampedLayout {
        filename,
        name,
        saved_at,
    })
}
