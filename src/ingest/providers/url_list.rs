use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use std::time::Duration;
use tokio::task::JoinSet;

use crate::ingest::extract::extract_article;
use crate::ingest::types::{Document, DocumentOutcome, DocumentSource, FailedDocument};

/// Fetches each URL over HTTP and extracts the article title and body.
/// Document ids are `URL_1`, `URL_2`, ... in list order.
pub struct UrlListSource {
    urls: Vec<String>,
    client: reqwest::Client,
}

impl UrlListSource {
    pub fn new(urls: Vec<String>, client: reqwest::Client) -> Self {
        Self { urls, client }
    }

    /// Client with the given request timeout and user agent.
    pub fn build_client(timeout: Duration, user_agent: &str) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("building HTTP client")
    }

    pub fn document_id(index: usize) -> String {
        format!("URL_{}", index + 1)
    }
}

async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?;
    resp.text()
        .await
        .with_context(|| format!("reading body of {url}"))
}

async fn fetch_one(client: reqwest::Client, id: String, url: String) -> DocumentOutcome {
    let t0 = std::time::Instant::now();
    let res = fetch_html(&client, &url).await;
    histogram!("ingest_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

    match res {
        Ok(html) => Ok(Document {
            id,
            text: extract_article(&html).full_text(),
            origin: Some(url),
        }),
        Err(error) => Err(FailedDocument { id, error }),
    }
}

#[async_trait]
impl DocumentSource for UrlListSource {
    async fn fetch_documents(&self) -> Result<Vec<DocumentOutcome>> {
        let mut set = JoinSet::new();
        for (idx, url) in self.urls.iter().enumerate() {
            let client = self.client.clone();
            let id = Self::document_id(idx);
            let url = url.clone();
            set.spawn(async move { (idx, fetch_one(client, id, url).await) });
        }

        let mut slots: Vec<Option<DocumentOutcome>> = (0..self.urls.len()).map(|_| None).collect();
        while let Some(joined) = set.join_next().await {
            let (idx, outcome) = joined.context("url fetch task failed")?;
            slots[idx] = Some(outcome);
        }

        let out: Vec<DocumentOutcome> = slots.into_iter().flatten().collect();
        counter!("ingest_documents_total").increment(out.iter().filter(|o| o.is_ok()).count() as u64);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "url_list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_based() {
        assert_eq!(UrlListSource::document_id(0), "URL_1");
        assert_eq!(UrlListSource::document_id(36), "URL_37");
    }
}
