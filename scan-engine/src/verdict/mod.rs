//! Verdicts
//!
//! The aggregation core. This is where Benign-vs-Suspicious-vs-Malicious is
//! decided.
//!
//! - `types`: risk levels, findings, the verdict record. No logic.
//! - `aggregator`: the ordered check pipeline with its short-circuit and
//!   escalation rules.

pub mod aggregator;
pub mod types;

pub use aggregator::ScanEngine;
pub use types::{FindingKind, RiskLevel, ScanFinding, ScanStatus, Verdict};
