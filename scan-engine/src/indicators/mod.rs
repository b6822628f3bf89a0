//! Indicator Matching
//!
//! Known-bad indicators and the lookups against them:
//! - `types`: the process-lifetime [`IndicatorSet`]
//! - `loader`: line-delimited source loading
//! - `hash`: chunked SHA-256 digests and exact-match lookup
//! - `extension`: extension blocklist policy
//! - `strings`: bounded substring scan

pub mod extension;
pub mod hash;
pub mod loader;
pub mod strings;
pub mod types;

pub use types::{IndicatorSet, IndicatorStats};
