use std::sync::Arc;

use axum::{extract::State, Json};
use docpilot_types::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiResult, routes::render::RenderResponse, state::AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    pub is_sending: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendMessageResponse {
    /// `None` when the input was blank and nothing was sent
    pub reply: Option<ChatMessage>,
    pub rendered: Option<RenderResponse>,
}

/// Current copilot transcript
#[utoipa::path(
    get,
    path = "/copilot/messages",
    responses(
        (status = 200, description = "Transcript", body = TranscriptResponse)
    ),
    tag = "copilot"
)]
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<TranscriptResponse> {
    Json(TranscriptResponse {
        messages: state.copilot.messages().await,
        is_sending: state.copilot.is_sending(),
    })
}

/// Send one message and wait for the copilot reply
///
/// Remote failures come back as a fallback reply with status 200.
#[utoipa::path(
    post,
    path = "/copilot/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Assistant reply", body = SendMessageResponse),
        (status = 409, description = "A reply is already pending")
    ),
    tag = "copilot"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Json<SendMessageResponse>> {
    let reply = state.copilot.send(&req.content).await?;
    let rendered = reply
        .as_ref()
        .map(|message| RenderResponse::from_text(&message.content));

    Ok(Json(SendMessageResponse { reply, rendered }))
}

/// Start a fresh session with only the welcome message
#[utoipa::path(
    delete,
    path = "/copilot/messages",
    responses(
        (status = 200, description = "Fresh transcript", body = TranscriptResponse)
    ),
    tag = "copilot"
)]
pub async fn reset_session(State(state): State<Arc<AppState>>) -> Json<TranscriptResponse> {
    let messages = state.copilot.reset().await;
    Json(TranscriptResponse {
        messages,
        is_sending: state.copilot.is_sending(),
    })
}
