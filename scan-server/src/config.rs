//! Configuration module

use std::env;
use std::path::PathBuf;

/// Maximum accepted upload size (32 MiB) unless overridden.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory holding the line-delimited indicator sources
    /// (known_hashes.txt, bad_strings.txt, bad_extensions.txt)
    pub data_dir: PathBuf,

    /// Path to trained classifier parameters; unset selects the stub
    /// classifier
    pub model_path: Option<String>,

    /// Decision threshold for the classifier signal
    pub classifier_threshold: f64,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),

            model_path: env::var("MODEL_PATH").ok(),

            classifier_threshold: env::var("CLASSIFIER_THRESHOLD")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(fileshield_engine::config::DEFAULT_CLASSIFIER_THRESHOLD),

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}
