use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::counter;
use std::path::{Path, PathBuf};

use crate::ingest::types::{Document, DocumentOutcome, DocumentSource, FailedDocument};

/// Reads every `*.txt` file in a directory; the file stem is the document id.
pub struct TextDirSource {
    dir: PathBuf,
}

impl TextDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn list_txt_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("reading articles directory {}", dir.display()))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(e) => e.path(),
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = ?e, "unreadable directory entry skipped");
                    counter!("ingest_failures_total").increment(1);
                    continue;
                }
            };
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl DocumentSource for TextDirSource {
    async fn fetch_documents(&self) -> Result<Vec<DocumentOutcome>> {
        let files = Self::list_txt_files(&self.dir)?;

        let mut out = Vec::with_capacity(files.len());
        for path in files {
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();
            // Undecodable bytes are dropped rather than failing the document.
            let outcome = match tokio::fs::read(&path).await {
                Ok(bytes) => Ok(Document {
                    id,
                    text: String::from_utf8_lossy(&bytes).replace('\u{FFFD}', ""),
                    origin: Some(path.display().to_string()),
                }),
                Err(e) => Err(FailedDocument {
                    id,
                    error: anyhow::Error::new(e).context(format!("reading {}", path.display())),
                }),
            };
            out.push(outcome);
        }

        counter!("ingest_documents_total").increment(out.iter().filter(|o| o.is_ok()).count() as u64);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "text_dir"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn reads_sorted_txt_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("URL_2.txt"), "second").unwrap();
        fs::write(tmp.path().join("URL_1.txt"), b"fir\xffst").unwrap();
        fs::write(tmp.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(tmp.path().join("nested.txt")).unwrap();

        let out = TextDirSource::new(tmp.path()).fetch_documents().await.unwrap();
        let docs: Vec<Document> = out.into_iter().map(|o| o.unwrap()).collect();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["URL_1", "URL_2"]);
        assert_eq!(docs[0].text, "first");
    }

    #[tokio::test]
    async fn missing_directory_fails_the_source() {
        let tmp = tempfile::tempdir().unwrap();
        let src = TextDirSource::new(tmp.path().join("Articles"));
        let err = src.fetch_documents().await.unwrap_err();
        assert!(format!("{err:#}").contains("Articles"));
    }
}
