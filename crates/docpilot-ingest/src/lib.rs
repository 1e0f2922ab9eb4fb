//! Turns an uploaded file into one text blob.
//!
//! PDF pages are flattened with a `[PAGE n]` marker in front of each page
//! so the summarization model can cite page numbers.

pub mod error;
pub mod ingestor;
pub mod kind;
pub mod markers;
pub mod pdf;

pub use error::{IngestError, Result};
pub use ingestor::{DocumentIngestor, IngestedDocument, UploadedFile};
pub use kind::DocumentKind;
pub use markers::{mark_pages, page_marker, page_markers};
pub use pdf::{LopdfExtractor, PdfTextExtractor};
