// src/ingest/extract.rs
//! Article extraction from HTML: title from the first `<h1>`, body from the
//! first `<article>` or, failing that, the first `<div class="content">`.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("h1 selector"));
static ARTICLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("article selector"));
static DIV_CONTENT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.content").expect("div.content selector"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub body: String,
}

impl Article {
    /// Title and body joined the way articles are stored on disk.
    pub fn full_text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

/// Extract title and body; missing parts become empty strings.
pub fn extract_article(html: &str) -> Article {
    let doc = Html::parse_document(html);

    let title = doc.select(&H1).next().map(element_text).unwrap_or_default();
    let body = doc
        .select(&ARTICLE)
        .next()
        .or_else(|| doc.select(&DIV_CONTENT).next())
        .map(element_text)
        .unwrap_or_default();

    Article { title, body }
}

fn element_text(el: ElementRef<'_>) -> String {
    let joined = el.text().collect::<Vec<_>>().join(" ");
    let decoded = html_escape::decode_html_entities(&joined);
    RE_WS.replace_all(&decoded, " ").trim().to_string()
}
