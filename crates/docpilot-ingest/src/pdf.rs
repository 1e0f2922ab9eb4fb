use crate::error::{IngestError, Result};

/// Page-by-page PDF text extraction
///
/// Implementations return one string per page, in page order.
pub trait PdfTextExtractor: Send + Sync {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// Extractor backed by `lopdf`
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl PdfTextExtractor for LopdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let document = lopdf::Document::load_mem(bytes)
            .map_err(|e| IngestError::Pdf(e.to_string()))?;

        // get_pages is keyed by 1-based page number, already sorted
        document
            .get_pages()
            .keys()
            .map(|page_number| {
                document
                    .extract_text(&[*page_number])
                    .map_err(|e| IngestError::Pdf(format!("page {}: {}", page_number, e)))
            })
            .collect()
    }
}
