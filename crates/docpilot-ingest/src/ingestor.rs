use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{IngestError, Result};
use crate::kind::DocumentKind;
use crate::markers::mark_pages;
use crate::pdf::{LopdfExtractor, PdfTextExtractor};

/// A file as it arrives from the upload control
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub text: String,
    /// Number of pages for PDFs, `None` for text formats
    pub page_count: Option<usize>,
}

/// Reads uploads into a single text blob
#[derive(Clone)]
pub struct DocumentIngestor {
    pdf: Arc<dyn PdfTextExtractor>,
}

impl DocumentIngestor {
    pub fn new() -> Self {
        Self {
            pdf: Arc::new(LopdfExtractor),
        }
    }

    pub fn with_pdf_extractor(mut self, extractor: Arc<dyn PdfTextExtractor>) -> Self {
        self.pdf = extractor;
        self
    }

    pub async fn ingest(&self, file: UploadedFile) -> Result<IngestedDocument> {
        let kind = DocumentKind::detect(&file.file_name, file.content_type.as_deref())?;

        let document = match kind {
            DocumentKind::Pdf => {
                let extractor = Arc::clone(&self.pdf);
                let bytes = file.bytes;
                // lopdf is CPU bound, keep it off the async workers
                let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&bytes))
                    .await
                    .map_err(|e| IngestError::Task(e.to_string()))??;

                IngestedDocument {
                    file_name: file.file_name,
                    kind,
                    text: mark_pages(&pages),
                    page_count: Some(pages.len()),
                }
            }
            DocumentKind::PlainText | DocumentKind::Markdown => IngestedDocument {
                file_name: file.file_name,
                kind,
                text: String::from_utf8(file.bytes)?,
                page_count: None,
            },
        };

        tracing::info!(
            file_name = %document.file_name,
            kind = ?document.kind,
            pages = ?document.page_count,
            chars = document.text.chars().count(),
            "Document ingested"
        );

        Ok(document)
    }

    /// Ingest a file from disk
    pub async fn ingest_path(&self, path: impl AsRef<Path>) -> Result<IngestedDocument> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| IngestError::UnsupportedFormat(path.display().to_string()))?
            .to_string();

        // Reject unsupported formats before touching the disk
        DocumentKind::detect(&file_name, None)?;

        let bytes = tokio::fs::read(path).await?;
        self.ingest(UploadedFile::new(file_name, bytes)).await
    }
}

impl Default for DocumentIngestor {
    fn default() -> Self {
        Self::new()
    }
}
