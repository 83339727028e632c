// src/ingest/archive.rs
//! Stores retrieved documents as `<id>.txt` files so later runs can analyze
//! them offline (see `TextDirSource`).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::ingest::types::Document;

/// Write each document to `dir/<id>.txt`, creating `dir` if needed.
/// Returns the written paths in input order.
pub fn save_documents(dir: &Path, docs: &[Document]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating articles directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(docs.len());
    for doc in docs {
        let path = dir.join(format!("{}.txt", file_safe(&doc.id)));
        std::fs::write(&path, &doc.text)
            .with_context(|| format!("writing article {}", path.display()))?;
        tracing::debug!(document = %doc.id, path = %path.display(), "article saved");
        written.push(path);
    }
    Ok(written)
}

/// Keep ids usable as file names.
fn file_safe(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' })
        .collect()
}
