//! Line-delimited indicator sources
//!
//! One token per line. Blank lines and `#` comments are skipped, tokens are
//! trimmed and lowercased. A missing source file is not an error: it yields
//! an empty set so a deployment without, say, a hash feed still scans.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Load tokens from a line-delimited file. Absent or unreadable files yield
/// an empty set.
pub fn load_lines(path: &Path) -> BTreeSet<String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_lines(&content),
        Err(e) => {
            log::warn!(
                "indicator source {} not readable ({}), using empty set",
                path.display(),
                e
            );
            BTreeSet::new()
        }
    }
}

pub(crate) fn parse_lines(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
