//! Verdict Types
//!
//! Data structures only; the decision logic lives in `aggregator`.
//! Serialized field names are a stable wire contract for downstream
//! consumers: `status`, `confidence`, `risk`, `findings`, `digest`,
//! `sizeBytes`.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Ordered risk level: low < medium < high < critical.
///
/// An explicit ordered enum, never compared as strings. Within one scan, risk
/// only ever escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Monotonic merge: the result is never lower than either input.
    pub fn escalate(self, other: RiskLevel) -> RiskLevel {
        self.max(other)
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCAN STATUS
// ============================================================================

/// Final classification for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// No signal fired
    Clean,
    /// Findings exist but none carries high/critical severity
    Suspicious,
    /// Known hash, classifier over threshold, or a high/critical finding
    Malicious,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Clean => "clean",
            ScanStatus::Suspicious => "suspicious",
            ScanStatus::Malicious => "malicious",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// FINDINGS
// ============================================================================

/// Which signal produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    HashMatch,
    ExtensionMatch,
    ClassifierMatch,
    StringMatch,
}

/// One signal hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFinding {
    pub kind: FindingKind,
    pub detail: String,
    pub severity: RiskLevel,
}

// ============================================================================
// VERDICT
// ============================================================================

/// Aggregate result for one scan. Created once per request, immutable after
/// construction, owned by the scan that produced it; not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: ScanStatus,
    pub confidence: f64,
    pub risk: RiskLevel,
    /// Findings in check order: hash, extension, classifier, strings
    pub findings: Vec<ScanFinding>,
    /// Lowercase hex SHA-256 of the content
    pub digest: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_escalate_never_downgrades() {
        let levels = [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ];
        for &a in &levels {
            for &b in &levels {
                let merged = a.escalate(b);
                assert!(merged >= a);
                assert!(merged >= b);
            }
        }
    }

    #[test]
    fn test_stable_wire_names() {
        let verdict = Verdict {
            status: ScanStatus::Suspicious,
            confidence: 0.8,
            risk: RiskLevel::High,
            findings: vec![ScanFinding {
                kind: FindingKind::ExtensionMatch,
                detail: "extension .exe is blocked".to_string(),
                severity: RiskLevel::Medium,
            }],
            digest: "00".repeat(32),
            size_bytes: 42,
        };

        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["status"], "suspicious");
        assert_eq!(json["risk"], "high");
        assert_eq!(json["sizeBytes"], 42);
        assert_eq!(json["findings"][0]["kind"], "ExtensionMatch");
        assert_eq!(json["findings"][0]["severity"], "medium");
        assert!(json.get("size_bytes").is_none());
    }
}
