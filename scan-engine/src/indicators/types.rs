//! Indicator Set
//!
//! Immutable, process-lifetime collection of known-bad indicators. Loaded
//! once at startup and shared read-only across scans; never mutated during
//! request handling, so concurrent lookups need no locking.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::Serialize;

use super::loader;

/// Known-bad indicator collection: hashes, substrings, extensions.
///
/// All tokens are lowercase-normalized and deduplicated. Empty source data
/// yields empty (not missing) sets. Bad strings live in a `BTreeSet` so the
/// string scan reports matched tokens in a deterministic order.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSet {
    hashes: HashSet<String>,
    bad_strings: BTreeSet<String>,
    bad_extensions: HashSet<String>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from in-memory tokens. Normalizes (trim, lowercase, strip a
    /// leading dot on extensions) and drops empty entries.
    pub fn from_parts<H, S, E>(hashes: H, bad_strings: S, bad_extensions: E) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            hashes: hashes
                .into_iter()
                .filter_map(|t| normalize(t.as_ref()))
                .collect(),
            bad_strings: bad_strings
                .into_iter()
                .filter_map(|t| normalize(t.as_ref()))
                .collect(),
            bad_extensions: bad_extensions
                .into_iter()
                .filter_map(|t| normalize(t.as_ref()))
                .map(|t| t.trim_start_matches('.').to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Load from three line-delimited sources. An absent or unreadable source
    /// yields an empty set, never an error.
    pub fn load(hashes_path: &Path, bad_strings_path: &Path, bad_extensions_path: &Path) -> Self {
        let hashes = loader::load_lines(hashes_path);
        let bad_strings = loader::load_lines(bad_strings_path);
        let bad_extensions = loader::load_lines(bad_extensions_path);

        Self::from_parts(&hashes, &bad_strings, &bad_extensions)
    }

    /// Exact, case-normalized membership test against the known-bad hash set.
    pub fn is_known_hash(&self, digest: &str) -> bool {
        self.hashes.contains(&digest.to_lowercase())
    }

    /// Blocklist lookup for an already-extracted extension (with or without a
    /// leading dot).
    pub fn is_bad_extension(&self, extension: &str) -> bool {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        !normalized.is_empty() && self.bad_extensions.contains(&normalized)
    }

    /// Bad substring tokens, in deterministic (sorted) order.
    pub fn bad_strings(&self) -> &BTreeSet<String> {
        &self.bad_strings
    }

    pub fn stats(&self) -> IndicatorStats {
        IndicatorStats {
            hashes: self.hashes.len(),
            bad_strings: self.bad_strings.len(),
            bad_extensions: self.bad_extensions.len(),
        }
    }
}

fn normalize(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_lowercase())
    }
}

/// Set sizes, for startup logging and status reporting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndicatorStats {
    pub hashes: usize,
    pub bad_strings: usize,
    pub bad_extensions: usize,
}
