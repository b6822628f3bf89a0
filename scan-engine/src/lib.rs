//! FileShield Engine
//!
//! Static threat classification for uploaded files. Combines four cheap,
//! independent signals into one verdict:
//!
//! - known-bad cryptographic hash set (exact match, short-circuits)
//! - blocked file extensions (aggravating factor)
//! - statistical features (size + byte-entropy) scored by a classifier
//! - indicator substring scan over best-effort decoded text
//!
//! The engine performs no I/O beyond the bytes it is handed and holds no
//! mutable state: the [`IndicatorSet`] and the classifier are constructed once
//! at startup and shared read-only across scans, so concurrent scans need no
//! locking.
//!
//! ```
//! use fileshield_engine::{EngineConfig, IndicatorSet, NullClassifier, ScanEngine, ScanStatus};
//!
//! let indicators = IndicatorSet::from_parts(
//!     &[] as &[&str],
//!     &["eicar"],
//!     &["exe"],
//! );
//! let engine = ScanEngine::new(indicators, Box::new(NullClassifier), EngineConfig::default());
//!
//! let verdict = engine.scan("notes.txt", b"meeting agenda").unwrap();
//! assert_eq!(verdict.status, ScanStatus::Clean);
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod indicators;
pub mod model;
pub mod verdict;

pub use config::EngineConfig;
pub use error::ScanError;
pub use features::FeatureVector;
pub use indicators::{IndicatorSet, IndicatorStats};
pub use model::{Classifier, ClassifierError, LogisticModel, LogisticParams, NullClassifier};
pub use verdict::{FindingKind, RiskLevel, ScanEngine, ScanFinding, ScanStatus, Verdict};
