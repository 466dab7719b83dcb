//! Layout filename convention.
//!
//! Generates deterministic filenames for saved layouts from the layout's
//! display name and the save instant.

use crate::types::Timestamp;

/// Maximum length of the sanitized name stem.
pub const MAX_FILENAME_STEM_LENGTH: usize = 30;

/// Stem used when the display name sanitizes to nothing.
pub const FALLBACK_FILENAME_STEM: &str = "layout";

/// Reduce a display name to a filename-safe stem.
///
/// Keeps only `[A-Za-z0-9_-]`, truncates to [`MAX_FILENAME_STEM_LENGTH`]
/// and falls back to [`FALLBACK_FILENAME_STEM`] when nothing survives.
///
/// # Examples
///
/// ```
/// use floorplan_core::naming::sanitize_layout_name;
///
/// assert_eq!(sanitize_layout_name("Office v1"), "Officev1");
/// assert_eq!(sanitize_layout_name("!!!"), "layout");
/// ```
pub fn sanitize_layout_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_FILENAME_STEM_LENGTH)
        .collect();

    if stem.is_empty() {
        FALLBACK_FILENAME_STEM.to_string()
    } else {
        stem
    }
}

/// Second-precision UTC timestamp with `:` and `.` replaced by `-`,
/// e.g. `2024-01-01T00-00-00`.
pub fn filename_timestamp(at: Timestamp) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Generate a layout filename.
///
/// Convention: `{sanitized_name}_{timestamp}.json`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use floorplan_core::naming::layout_filename;
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(layout_filename("v1", at), "v1_2024-01-01T00-00-00.json");
/// ```
pub fn layout_filename(display_name: &str, at: Timestamp) -> String {
    format!(
        "{}_{}.json",
        sanitize_layout_name(display_name),
        filename_timestamp(at)
    )
}
