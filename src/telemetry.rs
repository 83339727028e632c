//! Prometheus exposition for `serve` mode.
//!
//! The engine and ingest modules describe their own series; this module owns
//! the recorder, the worker gauge and the `/metrics` route.

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use metrics::{describe_gauge, gauge};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

/// Histogram buckets for the `*_ms` timings (per-document analysis, per-URL fetch).
const DURATION_BUCKETS_MS: &[f64] = &[
    0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 1_000.0, 5_000.0, 30_000.0,
];

const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub struct Telemetry {
    handle: PrometheusHandle,
}

impl Telemetry {
    /// Install the process-wide recorder. Call once, before the first document is analyzed.
    pub fn install(workers: usize) -> Result<Self> {
        let handle = PrometheusBuilder::new()
            .set_buckets_for_metric(Matcher::Suffix("_ms".to_string()), DURATION_BUCKETS_MS)
            .context("prometheus: duration buckets")?
            .install_recorder()
            .context("prometheus: install recorder")?;
        Ok(Self::with_handle(handle, workers))
    }

    /// Wrap an existing handle and publish the worker count through the current recorder.
    pub fn with_handle(handle: PrometheusHandle, workers: usize) -> Self {
        describe_gauge!(
            "analysis_workers",
            "Documents analyzed concurrently (0 in config resolves to available cores)."
        );
        gauge!("analysis_workers").set(workers as f64);
        Self { handle }
    }

    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// `GET /metrics` in the Prometheus text format.
    pub fn routes(&self) -> Router {
        Router::new()
            .route("/metrics", get(scrape))
            .with_state(self.handle.clone())
    }
}

async fn scrape(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], handle.render())
}
