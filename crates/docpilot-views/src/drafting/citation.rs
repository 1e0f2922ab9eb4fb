use docpilot_types::{ExecutiveSummary, PageRef, SourceContext};

use super::error::{DraftingError, Result};

pub const BULLET_CITATION_TITLE: &str = "Executive Highlight";
pub const UNKNOWN_REFERENCE: &str = "Unknown";

/// The one citation open in the source viewer
///
/// Metrics carry no page of their own, so verifying one points at the
/// summary-wide source reference instead.
#[derive(Debug, Clone, Default)]
pub struct CitationIndex {
    active: Option<SourceContext>,
}

impl CitationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&SourceContext> {
        self.active.as_ref()
    }

    pub fn select_bullet(
        &mut self,
        summary: &ExecutiveSummary,
        index: usize,
    ) -> Result<&SourceContext> {
        let bullet = summary
            .bullets
            .get(index)
            .ok_or(DraftingError::CitationOutOfRange {
                kind: "bullet",
                index,
                len: summary.bullets.len(),
            })?;

        Ok(&*self.active.insert(SourceContext {
            title: BULLET_CITATION_TITLE.to_string(),
            snippet: bullet.source_snippet.clone(),
            page: PageRef::Page(bullet.page_number),
        }))
    }

    pub fn select_metric(
        &mut self,
        summary: &ExecutiveSummary,
        index: usize,
    ) -> Result<&SourceContext> {
        let metric = summary
            .metrics
            .get(index)
            .ok_or(DraftingError::CitationOutOfRange {
                kind: "metric",
                index,
                len: summary.metrics.len(),
            })?;

        let reference = if summary.source_reference.is_empty() {
            UNKNOWN_REFERENCE.to_string()
        } else {
            summary.source_reference.clone()
        };

        Ok(&*self.active.insert(SourceContext {
            title: metric.label.clone(),
            snippet: metric.source.clone(),
            page: PageRef::Reference(reference),
        }))
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use docpilot_types::{BulletPoint, Confidence, Metric, Trend};

    use super::*;

    fn summary(source_reference: &str) -> ExecutiveSummary {
        ExecutiveSummary {
            bullets: vec![BulletPoint {
                text: "Revenue grew".to_string(),
                source_snippet: "Revenue grew 10%".to_string(),
                page_number: 1,
            }],
            metrics: vec![Metric {
                label: "Revenue Growth".to_string(),
                value: "10%".to_string(),
                trend: Trend::Up,
                confidence: Confidence::Strong,
                source: "Revenue grew 10%".to_string(),
            }],
            risks: vec![],
            source_reference: source_reference.to_string(),
        }
    }

    #[test]
    fn test_bullet_then_metric_replaces_slot() {
        let summary = summary("Page 2");
        let mut index = CitationIndex::new();

        index.select_bullet(&summary, 0).unwrap();
        assert_eq!(index.active().unwrap().page, PageRef::Page(1));

        index.select_metric(&summary, 0).unwrap();
        let active = index.active().unwrap();
        assert_eq!(active.title, "Revenue Growth");
        assert_eq!(active.snippet, "Revenue grew 10%");
        assert_eq!(active.page, PageRef::Reference("Page 2".to_string()));
    }

    #[test]
    fn test_metric_without_reference() {
        let mut index = CitationIndex::new();
        let active = index.select_metric(&summary(""), 0).unwrap();
        assert_eq!(active.page.to_string(), UNKNOWN_REFERENCE);
    }

    #[test]
    fn test_dismiss_empties_slot() {
        let mut index = CitationIndex::new();
        index.select_bullet(&summary("Page 2"), 0).unwrap();
        index.dismiss();
        assert!(index.active().is_none());
    }

    #[test]
    fn test_out_of_range_keeps_slot() {
        let summary = summary("Page 2");
        let mut index = CitationIndex::new();
        index.select_bullet(&summary, 0).unwrap();

        let err = index.select_bullet(&summary, 5).unwrap_err();
        assert!(matches!(
            err,
            DraftingError::CitationOutOfRange { kind: "bullet", index: 5, len: 1 }
        ));
        assert_eq!(index.active().unwrap().title, BULLET_CITATION_TITLE);
    }
}
