//! Static Classifier
//!
//! The scoring capability the aggregator consumes. Training and persistence
//! are external concerns; the engine only sees `score(features) -> P(malicious)`.

pub mod classifier;

pub use classifier::{Classifier, ClassifierError, LogisticModel, LogisticParams, NullClassifier};
