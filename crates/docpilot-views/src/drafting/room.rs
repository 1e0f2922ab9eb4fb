use std::sync::Arc;

use docpilot_ingest::{page_markers, DocumentIngestor, DocumentKind, UploadedFile};
use docpilot_render::SummaryExport;
use docpilot_types::{ExecutiveSummary, SourceContext};
use serde::Serialize;
use tokio::sync::RwLock;

use super::citation::CitationIndex;
use super::error::{DraftingError, Result};
use super::summarizer::SummaryGenerator;
use crate::in_flight::InFlight;

#[derive(Debug, Clone, Copy)]
pub struct DraftingSettings {
    /// Characters of document text shown in the preview pane
    pub preview_chars: usize,
}

impl Default for DraftingSettings {
    fn default() -> Self {
        Self { preview_chars: 1000 }
    }
}

#[derive(Debug, Default)]
struct DraftingState {
    file_name: Option<String>,
    kind: Option<DocumentKind>,
    page_count: Option<usize>,
    content: String,
    summary: Option<ExecutiveSummary>,
    citations: CitationIndex,
}

impl DraftingState {
    fn reset_document(&mut self) {
        self.file_name = None;
        self.kind = None;
        self.page_count = None;
        self.content.clear();
    }
}

/// Point-in-time view of the drafting workspace
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DraftingSnapshot {
    pub file_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub kind: Option<DocumentKind>,
    pub page_count: Option<usize>,
    pub content_chars: usize,
    pub preview: String,
    pub summary: Option<ExecutiveSummary>,
    pub active_source: Option<SourceContext>,
    pub is_ingesting: bool,
    pub is_analyzing: bool,
}

/// Upload, summarize, cite, export
pub struct DraftingRoom {
    ingestor: Arc<DocumentIngestor>,
    generator: SummaryGenerator,
    settings: DraftingSettings,
    state: Arc<RwLock<DraftingState>>,
    ingesting: InFlight,
    analyzing: InFlight,
}

impl DraftingRoom {
    pub fn new(ingestor: DocumentIngestor, generator: SummaryGenerator) -> Self {
        Self {
            ingestor: Arc::new(ingestor),
            generator,
            settings: DraftingSettings::default(),
            state: Arc::new(RwLock::new(DraftingState::default())),
            ingesting: InFlight::new(),
            analyzing: InFlight::new(),
        }
    }

    pub fn with_settings(mut self, settings: DraftingSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the working document
    ///
    /// The previous document, summary and open citation are discarded up
    /// front; on failure the workspace is left with no document. The work
    /// runs on its own task, so a caller that stops waiting cannot leave
    /// the new file name paired with the old text.
    pub async fn ingest(&self, file: UploadedFile) -> Result<DraftingSnapshot> {
        let guard = self.ingesting.try_begin().ok_or(DraftingError::Busy)?;
        let ingestor = Arc::clone(&self.ingestor);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let _guard = guard;

            {
                let mut state = state.write().await;
                state.reset_document();
                state.summary = None;
                state.citations.dismiss();
                state.file_name = Some(file.file_name.clone());
            }

            let result = ingestor.ingest(file).await;

            let mut state = state.write().await;
            match result {
                Ok(document) => {
                    state.file_name = Some(document.file_name);
                    state.kind = Some(document.kind);
                    state.page_count = document.page_count;
                    state.content = document.text;
                    Ok(())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Document ingestion failed, workspace reset");
                    state.reset_document();
                    Err(DraftingError::from(e))
                }
            }
        })
        .await??;

        Ok(self.snapshot().await)
    }

    /// Ask the model for an executive summary of the current document
    pub async fn generate(&self) -> Result<ExecutiveSummary> {
        let _guard = self.analyzing.try_begin().ok_or(DraftingError::Busy)?;

        let content = self.state.read().await.content.clone();
        let summary = self.generator.summarize(&content).await?;

        let markers = page_markers(&content);
        if !markers.is_empty() {
            for bullet in &summary.bullets {
                if !markers.contains(&bullet.page_number) {
                    tracing::warn!(
                        page = bullet.page_number,
                        "Summary bullet cites a page with no marker in the document"
                    );
                }
            }
        }

        tracing::info!(
            bullets = summary.bullets.len(),
            metrics = summary.metrics.len(),
            risks = summary.risks.len(),
            "Executive summary generated"
        );

        let mut state = self.state.write().await;
        state.summary = Some(summary.clone());
        state.citations.dismiss();

        Ok(summary)
    }

    pub async fn verify_bullet(&self, index: usize) -> Result<SourceContext> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let summary = state.summary.as_ref().ok_or(DraftingError::NoSummary)?;
        state.citations.select_bullet(summary, index).cloned()
    }

    pub async fn verify_metric(&self, index: usize) -> Result<SourceContext> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let summary = state.summary.as_ref().ok_or(DraftingError::NoSummary)?;
        state.citations.select_metric(summary, index).cloned()
    }

    pub async fn active_source(&self) -> Option<SourceContext> {
        self.state.read().await.citations.active().cloned()
    }

    pub async fn dismiss_source(&self) {
        self.state.write().await.citations.dismiss();
    }

    /// Markdown memo for the current summary
    pub async fn export(&self) -> Result<SummaryExport> {
        let state = self.state.read().await;
        let summary = state.summary.as_ref().ok_or(DraftingError::NoSummary)?;
        let file_name = state.file_name.as_deref().unwrap_or_default();
        Ok(SummaryExport::new(file_name, summary))
    }

    /// Drop the document, summary and citation
    pub async fn clear(&self) {
        *self.state.write().await = DraftingState::default();
    }

    pub async fn snapshot(&self) -> DraftingSnapshot {
        let state = self.state.read().await;
        DraftingSnapshot {
            file_name: state.file_name.clone(),
            kind: state.kind,
            page_count: state.page_count,
            content_chars: state.content.chars().count(),
            preview: state.content.chars().take(self.settings.preview_chars).collect(),
            summary: state.summary.clone(),
            active_source: state.citations.active().cloned(),
            is_ingesting: self.ingesting.is_active(),
            is_analyzing: self.analyzing.is_active(),
        }
    }
}
