use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
