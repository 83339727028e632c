// src/ingest/types.rs
use anyhow::Result;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String, // e.g., "URL_3" or a file stem
    pub text: String,
    #[serde(default)]
    pub origin: Option<String>, // source URL or path
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            origin: None,
        }
    }
}

/// A document that could not be retrieved or read; the run continues without it.
#[derive(Debug)]
pub struct FailedDocument {
    pub id: String,
    pub error: anyhow::Error,
}

pub type DocumentOutcome = std::result::Result<Document, FailedDocument>;

#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// `Err` means the whole source failed; per-document failures go in the outcomes.
    async fn fetch_documents(&self) -> Result<Vec<DocumentOutcome>>;
    fn name(&self) -> &'static str;
}
