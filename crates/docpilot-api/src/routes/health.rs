use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: HashMap<String, String>,
}

/// Health check endpoint
///
/// Reports the configured model endpoint and transcript storage
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let mut services = HashMap::new();

    services.insert(
        "llm".to_string(),
        state
            .config
            .llm
            .base_url
            .clone()
            .unwrap_or_else(|| "default".to_string()),
    );
    services.insert(
        "transcript_storage".to_string(),
        state.config.copilot.storage_dir.display().to_string(),
    );
    services.insert(
        "assets".to_string(),
        state.dashboard.catalog().len().to_string(),
    );

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    }))
}
