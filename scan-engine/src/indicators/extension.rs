//! Extension blocklist policy
//!
//! Works on the raw filename the transport hands over; path traversal and
//! filename sanitization are the caller's responsibility, not this module's.

use super::IndicatorSet;

/// Substring after the last `.`, lowercased. `None` when the filename has no
/// extension (no dot, or nothing after the last dot).
pub fn extract_extension(filename: &str) -> Option<String> {
    let idx = filename.rfind('.')?;
    let ext = &filename[idx + 1..];
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

/// Blocklist lookup. Files without an extension are never blocked.
pub fn is_blocked(filename: &str, indicators: &IndicatorSet) -> bool {
    extract_extension(filename)
        .map(|ext| indicators.is_bad_extension(&ext))
        .unwrap_or(false)
}
