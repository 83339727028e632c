// src/ingest/mod.rs
pub mod archive;
pub mod config;
pub mod extract;
pub mod providers;
pub mod types;

use crate::ingest::types::{Document, DocumentSource, FailedDocument};
use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "ingest_documents_total",
            "Documents successfully retrieved from sources."
        );
        describe_counter!(
            "ingest_failures_total",
            "Documents or whole sources that failed to fetch/read."
        );
        describe_histogram!("ingest_fetch_ms", "Per-URL fetch time in milliseconds.");
    });
}

/// Everything one ingest pass produced.
#[derive(Debug, Default)]
pub struct Collected {
    pub documents: Vec<Document>,
    pub failures: Vec<FailedDocument>,
}

/// Run every source once. Failures are logged and collected, never fatal:
/// a broken document or source must not stop the others.
pub async fn run_once(sources: &[Box<dyn DocumentSource>]) -> Collected {
    ensure_metrics_described();

    let mut collected = Collected::default();
    for src in sources {
        match src.fetch_documents().await {
            Ok(outcomes) => {
                for outcome in outcomes {
                    match outcome {
                        Ok(doc) => {
                            tracing::info!(source = src.name(), document = %doc.id, "document retrieved");
                            collected.documents.push(doc);
                        }
                        Err(failed) => {
                            tracing::warn!(
                                source = src.name(),
                                document = %failed.id,
                                error = ?failed.error,
                                "document skipped"
                            );
                            counter!("ingest_failures_total").increment(1);
                            collected.failures.push(failed);
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = ?e, source = src.name(), "source error");
                counter!("ingest_failures_total").increment(1);
            }
        }
    }
    collected
}
