//! # Batch Engine
//! Analyzes many documents in parallel against one shared, read-only `Lexicons`.
//!
//! Each document runs on the blocking pool under a semaphore sized to the worker
//! count. Documents are independent: a panic while analyzing one is recorded as
//! a failure for that document only. Reports come back in input order.

use std::num::NonZeroUsize;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::analyze::analyze;
use crate::ingest::types::Document;
use crate::lexicon::Lexicons;
use crate::record::DocumentReport;

fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("analysis_documents_total", "Documents analyzed.");
        describe_counter!(
            "analysis_failures_total",
            "Documents whose analysis task failed."
        );
        describe_histogram!(
            "analysis_duration_ms",
            "Per-document analysis time in milliseconds."
        );
    });
}

/// Result of one batch: successful reports plus ids that failed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchOutcome {
    pub documents: Vec<DocumentReport>,
    pub failed: Vec<String>,
}

/// Worker count to use when the configured value is 0.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Analyze one document synchronously.
pub fn analyze_document(doc: &Document, lexicons: &Lexicons) -> DocumentReport {
    DocumentReport {
        id: doc.id.clone(),
        metrics: analyze(&doc.text, lexicons),
    }
}

/// Analyze all documents concurrently, at most `workers` at a time (0 = available cores).
pub async fn analyze_all(
    documents: Vec<Document>,
    lexicons: Arc<Lexicons>,
    workers: usize,
) -> BatchOutcome {
    analyze_with(documents, workers, move |doc| analyze_document(doc, &lexicons)).await
}

/// Batch driver behind `analyze_all`, generic over the per-document analysis.
///
/// A document whose analysis panics, or whose task dies, is listed in `failed`
/// under its own id. `failed` follows input order like `documents`.
pub async fn analyze_with<F>(documents: Vec<Document>, workers: usize, analyzer: F) -> BatchOutcome
where
    F: Fn(&Document) -> DocumentReport + Send + Sync + 'static,
{
    ensure_metrics_described();

    let workers = if workers == 0 {
        default_workers()
    } else {
        workers
    };
    let permits = Arc::new(Semaphore::new(workers));
    let analyzer = Arc::new(analyzer);
    let ids: Vec<String> = documents.iter().map(|d| d.id.clone()).collect();

    let mut set = JoinSet::new();
    for (idx, doc) in documents.into_iter().enumerate() {
        let permits = permits.clone();
        let analyzer = analyzer.clone();
        set.spawn(async move {
            // The semaphore is never closed, so acquire only fails if that changes.
            let _permit = permits.acquire_owned().await.ok();
            let res = tokio::task::spawn_blocking(move || {
                let t0 = Instant::now();
                let report = catch_unwind(AssertUnwindSafe(|| (*analyzer)(&doc)));
                histogram!("analysis_duration_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
                report.ok()
            })
            .await
            .ok()
            .flatten();
            (idx, res)
        });
    }

    let mut slots: Vec<Option<DocumentReport>> = ids.iter().map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, Some(report))) => slots[idx] = Some(report),
            Ok((idx, None)) => {
                tracing::warn!(document = %ids[idx], "analysis failed; document skipped");
            }
            // The slot stays empty and the id is picked up below.
            Err(e) => tracing::warn!(error = ?e, "analysis task aborted"),
        }
    }

    let mut documents = Vec::with_capacity(slots.len());
    let mut failed = Vec::new();
    for (id, slot) in ids.into_iter().zip(slots) {
        match slot {
            Some(report) => documents.push(report),
            None => failed.push(id),
        }
    }

    counter!("analysis_documents_total").increment(documents.len() as u64);
    counter!("analysis_failures_total").increment(failed.len() as u64);
    tracing::info!(
        analyzed = documents.len(),
        failed = failed.len(),
        workers,
        "batch analysis finished"
    );

    BatchOutcome { documents, failed }
}
