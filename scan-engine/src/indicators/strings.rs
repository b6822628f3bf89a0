//! Indicator string scan
//!
//! Bounded substring search for known-bad tokens inside best-effort decoded
//! text. Two deliberate limitations:
//!
//! - Inputs over the size cap are skipped entirely (empty result). This is a
//!   documented cost/coverage tradeoff and the engine's only backpressure
//!   mechanism, not degraded coverage hiding as success.
//! - Binary content that does not decode cleanly is scanned over whatever
//!   text is recoverable; decoding never aborts the scan.

use super::IndicatorSet;

/// Scan content for bad substring tokens. Returns matched tokens in the
/// indicator set's deterministic order.
pub fn scan(content: &[u8], indicators: &IndicatorSet, max_size_bytes: usize) -> Vec<String> {
    if content.len() > max_size_bytes {
        log::debug!(
            "content {} bytes over string-scan cap {}, skipping",
            content.len(),
            max_size_bytes
        );
        return Vec::new();
    }

    let text = String::from_utf8_lossy(content).to_lowercase();

    indicators
        .bad_strings()
        .iter()
        .filter(|token| text.contains(token.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(tokens: &[&str]) -> IndicatorSet {
        IndicatorSet::from_parts(&[] as &[&str], tokens, &[] as &[&str])
    }

    #[test]
    fn test_case_insensitive_match() {
        let set = indicators(&["eicar"]);
        let matches = scan(b"this file contains EICAR somewhere", &set, 1024);
        assert_eq!(matches, vec!["eicar".to_string()]);
    }

    #[test]
    fn test_matches_in_deterministic_order() {
        let set = indicators(&["virus", "malware"]);
        let matches = scan(b"malware and virus together", &set, 1024);
        assert_eq!(matches, vec!["malware".to_string(), "virus".to_string()]);
    }

    #[test]
    fn test_oversized_input_is_skipped() {
        let set = indicators(&["eicar"]);
        let content = b"EICAR".repeat(100);
        // Token present, but the cap wins
        assert!(scan(&content, &set, 64).is_empty());
        // Same bytes under the cap do match
        assert!(!scan(&content, &set, 1024).is_empty());
    }

    #[test]
    fn test_binary_content_scans_recoverable_text() {
        let set = indicators(&["mimikatz"]);
        let mut content = vec![0xFFu8, 0xFE, 0x00, 0x80];
        content.extend_from_slice(b"run mimikatz now");
        content.extend_from_slice(&[0xC3, 0x28]);
        let matches = scan(&content, &set, 1024);
        assert_eq!(matches, vec!["mimikatz".to_string()]);
    }

    #[test]
    fn test_no_indicators_no_matches() {
        let set = indicators(&[]);
        assert!(scan(b"anything at all", &set, 1024).is_empty());
    }
}
