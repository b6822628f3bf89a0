//! File scan handler
//!
//! Accepts a multipart upload, buffers it fully, and hands it to the engine.
//! The transport owns streaming/buffering; the engine only ever sees complete
//! bytes.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use fileshield_engine::Verdict;

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    #[serde(rename = "scanId")]
    pub scan_id: String,
    pub filename: String,
    #[serde(rename = "scannedAt")]
    pub scanned_at: DateTime<Utc>,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Scan an uploaded file. Expects multipart/form-data with a `file` part.
pub async fn scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ScanResponse>> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::ValidationError("No filename provided".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::ValidationError(format!("Failed to read upload: {}", e)))?;
        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, content) =
        upload.ok_or_else(|| AppError::ValidationError("No file provided".to_string()))?;

    let scan_id = format!("scan-{}", Uuid::new_v4());
    tracing::info!("{}: scanning {} ({} bytes)", scan_id, filename, content.len());

    // Hashing and entropy are CPU-bound; keep them off the async workers.
    let engine = state.engine.clone();
    let scan_filename = filename.clone();
    let verdict = tokio::task::spawn_blocking(move || engine.scan(&scan_filename, &content))
        .await
        .map_err(|e| AppError::InternalError(format!("scan task failed: {}", e)))??;

    tracing::info!(
        "{}: verdict {} (risk {}, {} findings)",
        scan_id,
        verdict.status,
        verdict.risk,
        verdict.findings.len()
    );

    Ok(Json(ScanResponse {
        scan_id,
        filename,
        scanned_at: Utc::now(),
        verdict,
    }))
}
