//! Classifier variants
//!
//! One capability trait, two implementations selected by configuration:
//! a trained statistical model with parameters loaded at startup, and a stub
//! for deployments that run indicator-only. Never selected by runtime type
//! inspection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::FeatureVector;

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ClassifierError(pub String);

/// Scoring capability: P(malicious | features), in [0.0, 1.0].
///
/// Implementations are stateless per call and shared read-only across scans.
pub trait Classifier: Send + Sync {
    fn score(&self, features: &FeatureVector) -> Result<f64, ClassifierError>;

    /// Short name for logs and status reporting.
    fn name(&self) -> &'static str;
}

// ============================================================================
// TRAINED MODEL
// ============================================================================

/// Parameters for the trained statistical model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticParams {
    pub size_weight: f64,
    pub entropy_weight: f64,
    pub bias: f64,
}

/// Logistic regression over (log-scaled size, entropy).
///
/// The size term is log-scaled so multi-megabyte inputs do not saturate the
/// logit and drown out the entropy signal.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    params: LogisticParams,
}

impl LogisticModel {
    pub fn new(params: LogisticParams) -> Self {
        Self { params }
    }

    /// Load parameters from a JSON file produced by the training pipeline.
    pub fn from_file(path: &Path) -> Result<Self, ClassifierError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ClassifierError(format!("model file {}: {}", path.display(), e)))?;
        let params: LogisticParams = serde_json::from_str(&raw)
            .map_err(|e| ClassifierError(format!("model file {}: {}", path.display(), e)))?;
        Ok(Self::new(params))
    }

    pub fn params(&self) -> &LogisticParams {
        &self.params
    }
}

impl Classifier for LogisticModel {
    fn score(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let size_term = (features.size as f64 + 1.0).ln();
        let z = self.params.size_weight * size_term
            + self.params.entropy_weight * features.entropy
            + self.params.bias;
        let probability = 1.0 / (1.0 + (-z).exp());

        if !probability.is_finite() {
            return Err(ClassifierError(format!(
                "non-finite probability for features {:?}",
                features
            )));
        }
        Ok(probability.clamp(0.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "logistic"
    }
}

// ============================================================================
// STUB
// ============================================================================

/// Stub classifier: always scores 0.0. For deployments without a trained
/// model, where only hash/extension/string indicators should decide.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClassifier;

impl Classifier for NullClassifier {
    fn score(&self, _features: &FeatureVector) -> Result<f64, ClassifierError> {
        Ok(0.0)
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::features;

    fn params() -> LogisticParams {
        LogisticParams {
            size_weight: 0.0,
            entropy_weight: 1.0,
            bias: -4.0,
        }
    }

    #[test]
    fn test_null_classifier_always_zero() {
        let clf = NullClassifier;
        assert_eq!(clf.score(&features::extract(&[])).unwrap(), 0.0);
        assert_eq!(clf.score(&features::extract(b"payload")).unwrap(), 0.0);
    }

    #[test]
    fn test_probability_bounds() {
        let clf = LogisticModel::new(params());
        for content in [&b""[..], &b"aaaa"[..], &b"random-ish content 123"[..]] {
            let p = clf.score(&features::extract(content)).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_monotonic_in_entropy() {
        let clf = LogisticModel::new(params());
        let low = clf
            .score(&FeatureVector { size: 100, entropy: 1.0 })
            .unwrap();
        let high = clf
            .score(&FeatureVector { size: 100, entropy: 7.5 })
            .unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_empty_input_scores_without_error() {
        let clf = LogisticModel::new(params());
        let p = clf.score(&features::extract(&[])).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_params_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"size_weight": 0.1, "entropy_weight": 0.9, "bias": -5.2}}"#
        )
        .unwrap();
        drop(file);

        let clf = LogisticModel::from_file(&path).unwrap();
        assert_eq!(clf.params().entropy_weight, 0.9);
    }

    #[test]
    fn test_missing_or_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LogisticModel::from_file(&dir.path().join("missing.json")).is_err());

        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();
        assert!(LogisticModel::from_file(&path).is_err());
    }
}
