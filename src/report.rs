//! Report writers: the flat `LABEL: value` text layout and a JSON summary.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

use crate::record::DocumentReport;

const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    /// `.json` selects JSON; anything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub documents: &'a [DocumentReport],
    pub failed: &'a [String],
}

/// One block per document: `URL_ID: <id>`, the metric lines, then a dashed separator.
pub fn render_text(reports: &[DocumentReport]) -> String {
    let mut out = String::new();
    for r in reports {
        let _ = writeln!(out, "URL_ID: {}", r.id);
        for (label, value) in r.metrics.labeled() {
            let _ = writeln!(out, "{label}: {value}");
        }
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    }
    out
}

pub fn render_json(reports: &[DocumentReport], failed: &[String]) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        documents: reports,
        failed,
    };
    serde_json::to_string_pretty(&report).context("serializing JSON report")
}

/// Write the report in the format implied by the file extension.
pub fn write_report(path: &Path, reports: &[DocumentReport], failed: &[String]) -> Result<()> {
    let body = match ReportFormat::from_path(path) {
        ReportFormat::Text => render_text(reports),
        ReportFormat::Json => render_json(reports, failed)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    std::fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    tracing::info!(path = %path.display(), documents = reports.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MetricsRecord;

    fn sample() -> Vec<DocumentReport> {
        vec![DocumentReport {
            id: "URL_1".into(),
            metrics: MetricsRecord {
                positive_score: 2,
                fog_index: 28.0,
                word_count: 10,
                ..Default::default()
            },
        }]
    }

    #[test]
    fn text_layout() {
        let s = render_text(&sample());
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "URL_ID: URL_1");
        assert_eq!(lines[1], "POSITIVE SCORE: 2");
        assert!(lines.contains(&"FOG INDEX: 28.0"));
        assert_eq!(lines[16], "WORD COUNT: 10");
        assert_eq!(lines[17], "-".repeat(60));
        assert_eq!(lines.len(), 18);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("out.JSON")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("Final_Analysis.txt")), ReportFormat::Text);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Text);
    }

    #[test]
    fn json_report_lists_failures() {
        let s = render_json(&sample(), &["URL_2".to_string()]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["documents"][0]["id"], "URL_1");
        assert_eq!(v["documents"][0]["positive_score"], 2);
        assert_eq!(v["failed"][0], "URL_2");
        assert!(v["generated_at"].is_string());
    }

    #[test]
    fn write_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("reports/out.json");
        write_report(&p, &sample(), &[]).unwrap();
        assert!(p.exists());
    }
}
