use axum::Json;
use docpilot_render::{format_message, to_html, Block};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenderRequest {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RenderResponse {
    #[schema(value_type = Vec<Object>)]
    pub blocks: Vec<Block>,
    pub html: String,
}

impl RenderResponse {
    pub fn from_text(text: &str) -> Self {
        let blocks = format_message(text);
        let html = to_html(&blocks);
        Self { blocks, html }
    }
}

/// Format arbitrary assistant text into table and text blocks
#[utoipa::path(
    post,
    path = "/render",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "Formatted blocks", body = RenderResponse)
    ),
    tag = "render"
)]
pub async fn render_text(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse::from_text(&req.text))
}
