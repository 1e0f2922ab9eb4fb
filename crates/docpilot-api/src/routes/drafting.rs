use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use docpilot_ingest::UploadedFile;
use docpilot_types::{ExecutiveSummary, SourceContext};
use docpilot_views::DraftingSnapshot;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CitationResponse {
    pub active_source: Option<SourceContext>,
}

/// Current drafting workspace
#[utoipa::path(
    get,
    path = "/drafting",
    responses(
        (status = 200, description = "Workspace snapshot", body = DraftingSnapshot)
    ),
    tag = "drafting"
)]
pub async fn get_drafting(State(state): State<Arc<AppState>>) -> Json<DraftingSnapshot> {
    Json(state.drafting.snapshot().await)
}

/// Drop the document, summary and open citation
#[utoipa::path(
    delete,
    path = "/drafting",
    responses(
        (status = 204, description = "Workspace cleared")
    ),
    tag = "drafting"
)]
pub async fn clear_drafting(State(state): State<Arc<AppState>>) -> StatusCode {
    state.drafting.clear().await;
    StatusCode::NO_CONTENT
}

/// Upload a `.txt`, `.md` or `.pdf` document (multipart field `file`)
#[utoipa::path(
    post,
    path = "/drafting/document",
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Multipart form with a `file` field"),
    responses(
        (status = 200, description = "Document ingested", body = DraftingSnapshot),
        (status = 400, description = "Unreadable document"),
        (status = 409, description = "An upload is already being processed"),
        (status = 415, description = "Unsupported document format")
    ),
    tag = "drafting"
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<DraftingSnapshot>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let mut file = UploadedFile::new(file_name, bytes.to_vec());
        if let Some(content_type) = content_type {
            file = file.with_content_type(content_type);
        }

        let snapshot = state.drafting.ingest(file).await?;
        return Ok(Json(snapshot));
    }

    Err(ApiError::BadRequest(
        "Missing multipart field `file`".to_string(),
    ))
}

/// Generate the executive summary for the current document
#[utoipa::path(
    post,
    path = "/drafting/summary",
    responses(
        (status = 200, description = "Summary generated", body = ExecutiveSummary),
        (status = 400, description = "Document is empty or too short"),
        (status = 409, description = "A summary is already being generated"),
        (status = 502, description = "The model call failed or returned an invalid summary")
    ),
    tag = "drafting"
)]
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExecutiveSummary>> {
    Ok(Json(state.drafting.generate().await?))
}

/// The citation open in the source viewer, if any
#[utoipa::path(
    get,
    path = "/drafting/citation",
    responses(
        (status = 200, description = "Active citation", body = CitationResponse)
    ),
    tag = "drafting"
)]
pub async fn get_citation(State(state): State<Arc<AppState>>) -> Json<CitationResponse> {
    Json(CitationResponse {
        active_source: state.drafting.active_source().await,
    })
}

/// Close the source viewer
#[utoipa::path(
    delete,
    path = "/drafting/citation",
    responses(
        (status = 204, description = "Citation dismissed")
    ),
    tag = "drafting"
)]
pub async fn dismiss_citation(State(state): State<Arc<AppState>>) -> StatusCode {
    state.drafting.dismiss_source().await;
    StatusCode::NO_CONTENT
}

/// Open the snippet behind summary bullet `index`
#[utoipa::path(
    post,
    path = "/drafting/citation/bullets/{index}",
    params(
        ("index" = usize, Path, description = "Zero-based bullet index")
    ),
    responses(
        (status = 200, description = "Citation opened", body = SourceContext),
        (status = 404, description = "No summary or no such bullet")
    ),
    tag = "drafting"
)]
pub async fn cite_bullet(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> ApiResult<Json<SourceContext>> {
    Ok(Json(state.drafting.verify_bullet(index).await?))
}

/// Open the snippet behind metric `index`
#[utoipa::path(
    post,
    path = "/drafting/citation/metrics/{index}",
    params(
        ("index" = usize, Path, description = "Zero-based metric index")
    ),
    responses(
        (status = 200, description = "Citation opened", body = SourceContext),
        (status = 404, description = "No summary or no such metric")
    ),
    tag = "drafting"
)]
pub async fn cite_metric(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> ApiResult<Json<SourceContext>> {
    Ok(Json(state.drafting.verify_metric(index).await?))
}

/// Download the summary as a markdown memo
#[utoipa::path(
    get,
    path = "/drafting/export",
    responses(
        (status = 200, description = "Markdown memo", content_type = "text/markdown", body = String),
        (status = 404, description = "No summary to export")
    ),
    tag = "drafting"
)]
pub async fn export_summary(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let export = state.drafting.export().await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export.file_name.replace('"', "")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.markdown,
    )
        .into_response())
}
