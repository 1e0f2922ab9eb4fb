use std::sync::LazyLock;

use docpilot_types::ExecutiveSummary;
use regex::Regex;
use serde::Serialize;

static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^/.]+$").expect("Invalid regex pattern for file extensions"));

/// A rendered memo ready for download
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryExport {
    pub file_name: String,
    pub markdown: String,
}

impl SummaryExport {
    pub fn new(source_file_name: &str, summary: &ExecutiveSummary) -> Self {
        Self {
            file_name: export_file_name(source_file_name),
            markdown: summary_markdown(source_file_name, summary),
        }
    }
}

/// `Summary_<name without its last extension>.md`
pub fn export_file_name(source_file_name: &str) -> String {
    format!(
        "Summary_{}.md",
        EXTENSION_REGEX.replace(source_file_name, "")
    )
}

/// Markdown memo: highlights with page numbers, a metrics table, then risks
pub fn summary_markdown(source_file_name: &str, summary: &ExecutiveSummary) -> String {
    let highlights = summary
        .bullets
        .iter()
        .map(|bullet| format!("- {} (Pg {})", bullet.text, bullet.page_number))
        .collect::<Vec<_>>()
        .join("\n");

    let metrics = summary
        .metrics
        .iter()
        .map(|metric| {
            format!(
                "| {} | {} | {} |",
                metric.label,
                metric.value,
                metric.confidence.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let risks = summary
        .risks
        .iter()
        .map(|risk| {
            format!(
                "### {} Risk: {}\nMitigation: {}",
                risk.impact.as_str(),
                risk.description,
                risk.mitigation.as_deref().unwrap_or("None provided")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "# Executive Summary: {}\n\n## Key Highlights\n{}\n\n## Metrics\n| Label | Value | Confidence |\n|---|---|---|\n{}\n\n## Risks\n{}",
        source_file_name, highlights, metrics, risks
    )
}
