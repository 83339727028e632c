//! # Pipeline
//! End-to-end workflows wired from config: fetch articles, analyze a folder
//! of articles, and the combined fetch → save → analyze → report run.
//!
//! Lexicon loading is the only fatal step besides config/report I/O; every
//! per-document problem is logged and the run carries on.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;

use crate::config::Settings;
use crate::engine::{analyze_all, BatchOutcome};
use crate::ingest::archive::save_documents;
use crate::ingest::config::load_url_list;
use crate::ingest::providers::{TextDirSource, UrlListSource};
use crate::ingest::types::DocumentSource;
use crate::ingest::{run_once, Collected};
use crate::lexicon::Lexicons;
use crate::report::write_report;

/// Fetch every URL in the configured list and store the articles on disk.
pub async fn fetch_articles(settings: &Settings) -> Result<Collected> {
    let urls = load_url_list(&settings.paths.input_urls)?;
    let client = UrlListSource::build_client(settings.http.timeout(), &settings.http.user_agent)?;
    let sources: Vec<Box<dyn DocumentSource>> = vec![Box::new(UrlListSource::new(urls, client))];

    let collected = run_once(&sources).await;
    save_documents(&settings.paths.articles_dir, &collected.documents)?;
    tracing::info!(
        saved = collected.documents.len(),
        failed = collected.failures.len(),
        dir = %settings.paths.articles_dir.display(),
        "articles fetched"
    );
    Ok(collected)
}

/// Read every stored article from the configured articles directory.
async fn collect_articles(settings: &Settings) -> Collected {
    let sources: Vec<Box<dyn DocumentSource>> =
        vec![Box::new(TextDirSource::new(&settings.paths.articles_dir))];
    run_once(&sources).await
}

async fn analyze_collected(collected: Collected, lexicons: Arc<Lexicons>, workers: usize) -> BatchOutcome {
    let mut outcome = analyze_all(collected.documents, lexicons, workers).await;
    outcome
        .failed
        .extend(collected.failures.into_iter().map(|f| f.id));
    outcome
}

/// Analyze every article in the configured articles directory.
pub async fn analyze_articles(settings: &Settings, lexicons: Arc<Lexicons>) -> Result<BatchOutcome> {
    let collected = collect_articles(settings).await;
    Ok(analyze_collected(collected, lexicons, settings.run.workers).await)
}

/// Analyze the articles directory and write the report.
pub async fn analyze_and_report(settings: &Settings) -> Result<BatchOutcome> {
    // Lexicons must be complete before any document task starts.
    let lexicons = Arc::new(Lexicons::load(&settings.lexicon_paths())?);
    let outcome = analyze_articles(settings, lexicons).await?;
    write_report(&settings.paths.output, &outcome.documents, &outcome.failed)?;
    Ok(outcome)
}

/// The full workflow: fetch, save, analyze, report.
///
/// An id whose fetch failed in this run is reported as failed only; a copy
/// left in the articles directory by an earlier run is not analyzed.
pub async fn run(settings: &Settings) -> Result<BatchOutcome> {
    let lexicons = Arc::new(Lexicons::load(&settings.lexicon_paths())?);
    let fetched = fetch_articles(settings).await?;
    let fetch_failed: HashSet<String> = fetched.failures.into_iter().map(|f| f.id).collect();

    let mut collected = collect_articles(settings).await;
    collected.documents.retain(|doc| {
        let stale = fetch_failed.contains(&doc.id);
        if stale {
            tracing::warn!(document = %doc.id, "fetch failed; ignoring stored copy from an earlier run");
        }
        !stale
    });

    let mut outcome = analyze_collected(collected, lexicons, settings.run.workers).await;
    let mut newly_failed: Vec<String> = fetch_failed
        .into_iter()
        .filter(|id| !outcome.failed.contains(id))
        .collect();
    newly_failed.sort_by_key(|id| id_order(id));
    outcome.failed.extend(newly_failed);

    write_report(&settings.paths.output, &outcome.documents, &outcome.failed)?;
    Ok(outcome)
}

/// `URL_12` sorts after `URL_2`; other ids sort after numbered ones, by name.
fn id_order(id: &str) -> (u64, String) {
    let n = id
        .strip_prefix("URL_")
        .and_then(|n| n.parse().ok())
        .unwrap_or(u64::MAX);
    (n, id.to_string())
}
