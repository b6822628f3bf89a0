//! Feature Extraction
//!
//! Turns raw bytes into the fixed feature vector the classifier consumes:
//! exact byte size plus Shannon entropy over the byte-value histogram. High
//! entropy correlates with packed/encrypted/compressed content, which is why
//! it carries signal for obfuscated malware.
//!
//! Extraction is a pure function of the input bytes.

use serde::{Deserialize, Serialize};

/// Per-scan feature vector consumed by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Byte length of the input, exactly
    pub size: u64,
    /// Shannon byte-entropy in [0.0, 8.0]; 0.0 for empty input
    pub entropy: f64,
}

/// Extract the feature vector from raw bytes.
pub fn extract(content: &[u8]) -> FeatureVector {
    FeatureVector {
        size: content.len() as u64,
        entropy: shannon_entropy(content),
    }
}

/// Shannon entropy of the byte-value distribution, in bits per byte.
///
/// Empty input is defined as 0.0 so callers never divide by zero.
pub fn shannon_entropy(content: &[u8]) -> f64 {
    if content.is_empty() {
        return 0.0;
    }

    let mut counts = [0u64; 256];
    for &byte in content {
        counts[byte as usize] += 1;
    }

    let total = content.len() as f64;
    let mut entropy = 0.0;
    for &count in counts.iter() {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let features = extract(&[]);
        assert_eq!(features.size, 0);
        assert_eq!(features.entropy, 0.0);
    }

    #[test]
    fn test_single_byte_value_is_zero_entropy() {
        // 10,000 copies of one byte value: single-symbol distribution
        let content = vec![0x41u8; 10_000];
        assert_eq!(shannon_entropy(&content), 0.0);
    }

    #[test]
    fn test_uniform_distribution_is_eight_bits() {
        // Each byte value 0-255 exactly once
        let content: Vec<u8> = (0..=255u8).collect();
        assert_eq!(content.len(), 256);
        assert_eq!(shannon_entropy(&content), 8.0);
    }

    #[test]
    fn test_entropy_within_bounds() {
        let content = b"The quick brown fox jumps over the lazy dog";
        let entropy = shannon_entropy(content);
        assert!(entropy > 0.0);
        assert!(entropy <= 8.0);
    }

    #[test]
    fn test_size_is_exact() {
        let features = extract(b"abcdef");
        assert_eq!(features.size, 6);
    }

    #[test]
    fn test_deterministic() {
        let content = b"same bytes, same features";
        assert_eq!(extract(content), extract(content));
    }
}
