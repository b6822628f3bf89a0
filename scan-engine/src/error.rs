//! Engine error taxonomy
//!
//! Only genuine failures live here. Decode degradation during the string scan
//! and oversized-for-string-scan inputs are defined behaviors, not errors, and
//! the malicious/clean distinction is always a computed value, never an
//! exception path.

use thiserror::Error;

use crate::model::ClassifierError;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Rejected input. The engine does not guess a verdict for missing
    /// content.
    #[error("no content to scan")]
    EmptyInput,

    /// The scoring capability could not produce a result. Fail-closed: a scan
    /// without a classifier answer is an error, never a silent "clean".
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(#[from] ClassifierError),
}
