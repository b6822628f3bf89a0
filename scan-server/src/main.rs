//! FileShield Scan API Server
//!
//! HTTP transport for the static threat classification engine.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    FILESHIELD SERVER                     │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌──────────────────────────────────┐  │
//! │  │  API       │   │  Scan Engine (shared, read-only) │  │
//! │  │  (Axum)    │──▶│  hashes · extensions · features  │  │
//! │  │  multipart │   │  classifier · string indicators  │  │
//! │  └────────────┘   └──────────────────────────────────┘  │
//! │         ▲                        ▲                       │
//! │   upload buffering        data/*.txt + model.json       │
//! │   (transport only)        loaded once at startup        │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fileshield_engine::{
    Classifier, EngineConfig, IndicatorSet, LogisticModel, NullClassifier, ScanEngine,
};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fileshield_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("FileShield scan server starting...");

    // Process-wide immutable state, constructed once. Absent indicator
    // sources are empty sets, not errors.
    let indicators = IndicatorSet::load(
        &config.data_dir.join("known_hashes.txt"),
        &config.data_dir.join("bad_strings.txt"),
        &config.data_dir.join("bad_extensions.txt"),
    );
    let stats = indicators.stats();
    tracing::info!(
        "Indicators loaded: {} hashes, {} strings, {} extensions",
        stats.hashes,
        stats.bad_strings,
        stats.bad_extensions
    );

    // Classifier selection is configuration, and a configured model that
    // fails to load is a startup error, never a silent fallback.
    let classifier: Box<dyn Classifier> = match &config.model_path {
        Some(path) => {
            let model = LogisticModel::from_file(Path::new(path))
                .with_context(|| format!("loading classifier model from {}", path))?;
            tracing::info!("Classifier: trained model from {}", path);
            Box::new(model)
        }
        None => {
            tracing::warn!("MODEL_PATH not set, using stub classifier (always scores 0.0)");
            Box::new(NullClassifier)
        }
    };

    let engine = Arc::new(ScanEngine::new(
        indicators,
        classifier,
        EngineConfig::with_threshold(config.classifier_threshold),
    ));

    let state = AppState { engine };
    let app = create_router(state, config.max_upload_bytes);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScanEngine>,
}

/// Create the main router with all routes
fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/scan", post(handlers::scan::scan))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    use super::*;

    fn test_app() -> Router {
        let indicators = IndicatorSet::from_parts(
            &[] as &[&str],
            &["eicar"],
            &["exe"],
        );
        let engine = Arc::new(ScanEngine::new(
            indicators,
            Box::new(NullClassifier),
            EngineConfig::default(),
        ));
        create_router(AppState { engine }, 1024 * 1024)
    }

    fn multipart_body(boundary: &str, filename: &str, content: &str) -> String {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n{c}\r\n--{b}--\r\n",
            b = boundary,
            f = filename,
            c = content
        )
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_scan_upload_returns_verdict() {
        let boundary = "XFILESHIELDX";
        let request = Request::post("/api/v1/scan")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(multipart_body(boundary, "note.txt", "hello EICAR")))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "suspicious");
        assert_eq!(json["risk"], "medium");
        assert_eq!(json["filename"], "note.txt");
        assert_eq!(json["sizeBytes"], 11);
        assert_eq!(json["findings"][0]["kind"], "StringMatch");
    }

    #[tokio::test]
    async fn test_scan_without_file_part_is_rejected() {
        let boundary = "XFILESHIELDX";
        let body = format!("--{b}--\r\n", b = boundary);
        let request = Request::post("/api/v1/scan")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_scan_empty_content_is_rejected() {
        let boundary = "XFILESHIELDX";
        let request = Request::post("/api/v1/scan")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(multipart_body(boundary, "empty.bin", "")))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
