//! Risk Aggregator
//!
//! Runs the static signals in a fixed order and merges them into one verdict:
//!
//! 1. digest lookup against the known-bad hash set — a hit short-circuits to
//!    malicious with confidence 1.0, nothing else runs
//! 2. extension blocklist — aggravating factor, raises risk to at least high
//!    but is never malicious on its own
//! 3. feature extraction + classifier — probability over the threshold makes
//!    the verdict malicious with confidence = probability; under it, the
//!    provisional confidence is 1 - probability
//! 4. indicator-string scan (skipped once risk is already critical) — each
//!    match raises risk to at least medium
//!
//! Risk escalates monotonically across the stages; no stage may downgrade a
//! level an earlier stage raised. Findings keep check order so verdicts are
//! reproducible byte-for-byte.

use crate::config::EngineConfig;
use crate::error::ScanError;
use crate::features;
use crate::indicators::{extension, hash, strings, IndicatorSet};
use crate::model::Classifier;

use super::types::{FindingKind, RiskLevel, ScanFinding, ScanStatus, Verdict};

/// The Static Threat Classification Engine.
///
/// Holds the process-wide read-only state (indicators, classifier, config).
/// Each `scan` call is an independent, stateless unit of work; the engine can
/// be shared freely across threads.
pub struct ScanEngine {
    indicators: IndicatorSet,
    classifier: Box<dyn Classifier>,
    config: EngineConfig,
}

impl ScanEngine {
    pub fn new(
        indicators: IndicatorSet,
        classifier: Box<dyn Classifier>,
        config: EngineConfig,
    ) -> Self {
        log::info!(
            "scan engine ready: classifier={}, threshold={:.2}",
            classifier.name(),
            config.classifier_threshold
        );
        Self {
            indicators,
            classifier,
            config,
        }
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify one file from its name and fully-buffered content.
    ///
    /// Empty content is rejected; the engine does not guess a verdict for
    /// missing input. A classifier failure fails the scan (fail-closed).
    pub fn scan(&self, filename: &str, content: &[u8]) -> Result<Verdict, ScanError> {
        if content.is_empty() {
            return Err(ScanError::EmptyInput);
        }

        let size_bytes = content.len() as u64;
        let digest = hash::sha256_hex(content);
        let mut findings: Vec<ScanFinding> = Vec::new();
        let mut risk = RiskLevel::Low;

        // 1. Known-bad hash: cheapest, most certain signal. Everything else
        //    is skipped on a hit.
        if self.indicators.is_known_hash(&digest) {
            log::info!("{}: known malicious hash {}", filename, digest);
            findings.push(ScanFinding {
                kind: FindingKind::HashMatch,
                detail: format!("digest {} is a known malicious hash", digest),
                severity: RiskLevel::Critical,
            });
            return Ok(Verdict {
                status: ScanStatus::Malicious,
                confidence: 1.0,
                risk: RiskLevel::Critical,
                findings,
                digest,
                size_bytes,
            });
        }

        // 2. Blocked extension: aggravating factor, not a verdict.
        if let Some(ext) = extension::extract_extension(filename) {
            if self.indicators.is_bad_extension(&ext) {
                findings.push(ScanFinding {
                    kind: FindingKind::ExtensionMatch,
                    detail: format!("extension .{} is blocked", ext),
                    severity: RiskLevel::Medium,
                });
                risk = risk.escalate(RiskLevel::High);
            }
        }

        // 3. Statistical features + classifier.
        let feature_vector = features::extract(content);
        let probability = self.classifier.score(&feature_vector)?;
        let classifier_fired = probability > self.config.classifier_threshold;
        if classifier_fired {
            findings.push(ScanFinding {
                kind: FindingKind::ClassifierMatch,
                detail: format!(
                    "static analysis probability {:.3} over threshold {:.2}",
                    probability, self.config.classifier_threshold
                ),
                severity: RiskLevel::High,
            });
            risk = risk.escalate(RiskLevel::High);
        }

        // 4. Indicator strings, unless already at maximum severity.
        if risk < RiskLevel::Critical {
            for token in strings::scan(content, &self.indicators, self.config.string_scan_max_bytes)
            {
                findings.push(ScanFinding {
                    kind: FindingKind::StringMatch,
                    detail: format!("content contains indicator \"{}\"", token),
                    severity: RiskLevel::Low,
                });
                risk = risk.escalate(RiskLevel::Medium);
            }
        }

        // 5. Finalize. Malicious requires a high/critical-severity finding or
        //    the classifier over its threshold; findings below that bar make
        //    the file suspicious, not malicious.
        let malicious =
            classifier_fired || findings.iter().any(|f| f.severity >= RiskLevel::High);
        let status = if malicious {
            ScanStatus::Malicious
        } else if findings.is_empty() {
            ScanStatus::Clean
        } else {
            ScanStatus::Suspicious
        };
        let confidence = if classifier_fired {
            probability
        } else {
            1.0 - probability
        };

        log::debug!(
            "{}: status={} risk={} findings={} p={:.3}",
            filename,
            status,
            risk,
            findings.len(),
            probability
        );

        Ok(Verdict {
            status,
            confidence,
            risk,
            findings,
            digest,
            size_bytes,
        })
    }
}
