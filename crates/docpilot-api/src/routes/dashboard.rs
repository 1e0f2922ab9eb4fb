use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use docpilot_types::Asset;
use docpilot_views::DashboardOverview;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Portfolio overview: AUM, quarterly shifts, weighted risk and inventory
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardOverview)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardOverview> {
    Json(state.dashboard.overview())
}

/// List every asset in the catalog
#[utoipa::path(
    get,
    path = "/assets",
    responses(
        (status = 200, description = "Asset catalog", body = Vec<Asset>)
    ),
    tag = "dashboard"
)]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> Json<Vec<Asset>> {
    Json(state.dashboard.assets().to_vec())
}

/// Get one asset with its performance series
#[utoipa::path(
    get,
    path = "/assets/{asset_id}",
    params(
        ("asset_id" = String, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset found", body = Asset),
        (status = 404, description = "Asset not found")
    ),
    tag = "dashboard"
)]
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<Asset>> {
    state
        .dashboard
        .asset(&asset_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("asset {}", asset_id)))
}
