// src/ingest/config.rs
//! URL list loading. Plain text (one URL per line) is the primary format;
//! a JSON array or TOML `urls = [...]` is also accepted.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Load the URL list from a file. Order is preserved; blank lines and
/// `#` comments are skipped; duplicates are kept (each gets its own id).
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading URL list from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_url_list(&content, ext.as_str())
}

fn parse_url_list(s: &str, hint_ext: &str) -> Result<Vec<String>> {
    match hint_ext {
        "json" => parse_json(s),
        "toml" => parse_toml(s),
        _ => {
            let trimmed = s.trim_start();
            if trimmed.starts_with('[') {
                return parse_json(s).map_err(|e| anyhow!("unsupported URL list format: {e}"));
            }
            if trimmed.starts_with("urls") {
                return parse_toml(s);
            }
            Ok(parse_lines(s))
        }
    }
}

fn parse_lines(s: &str) -> Vec<String> {
    clean_list(s.lines().filter(|l| !l.trim_start().starts_with('#')))
}

fn parse_toml(s: &str) -> Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct TomlUrls {
        urls: Vec<String>,
    }
    let v: TomlUrls = toml::from_str(s).context("parsing TOML URL list")?;
    Ok(clean_list(v.urls))
}

fn parse_json(s: &str) -> Result<Vec<String>> {
    let v: Vec<String> = serde_json::from_str(s).context("parsing JSON URL list")?;
    Ok(clean_list(v))
}

fn clean_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|it| it.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
