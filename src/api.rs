use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::engine::{self, BatchOutcome};
use crate::ingest::types::Document;
use crate::lexicon::Lexicons;
use crate::record::DocumentReport;

/// Shared, read-only state: lexicons are built before the server starts.
#[derive(Clone)]
pub struct AppState {
    pub lexicons: Arc<Lexicons>,
    pub workers: usize,
}

impl AppState {
    pub fn new(lexicons: Lexicons, workers: usize) -> Self {
        Self {
            lexicons: Arc::new(lexicons),
            workers,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
    #[serde(default)]
    id: Option<String>,
}

#[derive(serde::Deserialize)]
struct BatchItem {
    id: String,
    text: String,
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<DocumentReport>, (StatusCode, String)> {
    let doc = Document::new(body.id.unwrap_or_else(|| "document".to_string()), body.text);
    let lexicons = state.lexicons.clone();
    // CPU-bound; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || engine::analyze_document(&doc, &lexicons))
        .await
        .map_err(|e| {
            tracing::warn!(error = ?e, "analysis task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "analysis failed".to_string(),
            )
        })?;
    Ok(Json(report))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<BatchItem>>,
) -> Json<BatchOutcome> {
    let docs = items
        .into_iter()
        .map(|it| Document::new(it.id, it.text))
        .collect();
    let out = engine::analyze_all(docs, state.lexicons.clone(), state.workers).await;
    Json(out)
}
