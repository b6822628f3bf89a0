//! Engine Configuration
//!
//! Tunable parameters for the scan pipeline. Both knobs exist so operators can
//! adjust false-positive/false-negative behavior without redeploying the
//! engine.

use serde::{Deserialize, Serialize};

/// Probability above which the classifier alone marks a file malicious.
pub const DEFAULT_CLASSIFIER_THRESHOLD: f64 = 0.7;

/// Inputs larger than this skip the indicator-string scan entirely (4 MiB).
pub const DEFAULT_STRING_SCAN_MAX_BYTES: usize = 4 * 1024 * 1024;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decision threshold for the classifier signal (0.0 - 1.0)
    pub classifier_threshold: f64,

    /// Size cap for the indicator-string scan, in bytes
    pub string_scan_max_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier_threshold: DEFAULT_CLASSIFIER_THRESHOLD,
            string_scan_max_bytes: DEFAULT_STRING_SCAN_MAX_BYTES,
        }
    }
}

impl EngineConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            classifier_threshold: threshold,
            ..Default::default()
        }
    }

    /// High sensitivity - lower threshold, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            classifier_threshold: 0.5,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher threshold, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            classifier_threshold: 0.85,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = EngineConfig::default();
        assert_eq!(config.classifier_threshold, 0.7);
    }

    #[test]
    fn test_sensitivity_presets() {
        assert!(EngineConfig::high_sensitivity().classifier_threshold < 0.7);
        assert!(EngineConfig::low_sensitivity().classifier_threshold > 0.7);
    }
}
