use docpilot_ingest::IngestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftingError {
    #[error("Another drafting operation is already in progress")]
    Busy,

    #[error("Document is too short to analyze (minimum {min_chars} characters)")]
    DocumentTooShort { min_chars: usize },

    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("No summary has been generated")]
    NoSummary,

    #[error("No {kind} at index {index} (summary has {len})")]
    CitationOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Drafting task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DraftingError>;
