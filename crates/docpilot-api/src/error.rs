use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docpilot_ingest::IngestError;
use docpilot_views::{CopilotError, DraftingError};
use serde_json::json;
use thiserror::Error;

pub const INGEST_FAILED_MESSAGE: &str =
    "Failed to read file content. Ensure it's a valid text or PDF file.";

pub const DOCUMENT_TOO_SHORT_MESSAGE: &str =
    "The document appears to be empty or contains too little text to analyze.";

pub const SUMMARY_FAILED_MESSAGE: &str =
    "Error generating summary. Please try again with a different document.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unsupported document: {0}")]
    UnsupportedMediaType(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Document ingestion failed: {0}")]
    Ingest(IngestError),

    #[error("Document too short: {0}")]
    DocumentTooShort(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<DraftingError> for ApiError {
    fn from(err: DraftingError) -> Self {
        match err {
            DraftingError::Busy => Self::Busy(err.to_string()),
            DraftingError::DocumentTooShort { .. } => Self::DocumentTooShort(err.to_string()),
            DraftingError::Ingest(IngestError::UnsupportedFormat(name)) => {
                Self::UnsupportedMediaType(name)
            }
            DraftingError::Ingest(e) => Self::Ingest(e),
            DraftingError::Summarization(detail) => Self::Summarization(detail),
            DraftingError::NoSummary | DraftingError::CitationOutOfRange { .. } => {
                Self::NotFound(err.to_string())
            }
            DraftingError::Task(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<CopilotError> for ApiError {
    fn from(err: CopilotError) -> Self {
        match err {
            CopilotError::Busy => Self::Busy(err.to_string()),
            CopilotError::Task(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Busy(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::UnsupportedMediaType(ref name) => {
                tracing::warn!("Unsupported upload: {}", name);
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    INGEST_FAILED_MESSAGE.to_string(),
                )
            }
            ApiError::Ingest(ref e) => {
                tracing::warn!("Ingestion error: {}", e);
                (StatusCode::BAD_REQUEST, INGEST_FAILED_MESSAGE.to_string())
            }
            ApiError::DocumentTooShort(_) => (
                StatusCode::BAD_REQUEST,
                DOCUMENT_TOO_SHORT_MESSAGE.to_string(),
            ),
            ApiError::Summarization(ref detail) => {
                tracing::error!("Summarization error: {}", detail);
                (StatusCode::BAD_GATEWAY, SUMMARY_FAILED_MESSAGE.to_string())
            }
            ApiError::Internal(ref detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
