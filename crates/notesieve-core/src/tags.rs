//! Tag spelling helpers shared by the evaluator, suggestions and vault reader.

use crate::defaults::TAG_MARKER;

/// Remove one leading `#` marker, keeping the original casing.
pub fn strip_tag_marker(tag: &str) -> &str {
    tag.strip_prefix(TAG_MARKER).unwrap_or(tag)
}

/// Canonical comparison key for a tag: marker-stripped, trimmed, lowercased.
pub fn normalize_tag(tag: &str) -> String {
    strip_tag_marker(tag.trim()).trim().to_lowercase()
}

/// Prefix a tag with the marker unless it already carries one.
pub fn with_tag_marker(tag: &str) -> String {
    if tag.starts_with(TAG_MARKER) {
        tag.to_string()
    } else {
        format!("{}{}", TAG_MARKER, tag)
    }
}
