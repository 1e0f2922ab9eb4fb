pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::openapi::ApiDoc;
use crate::routes::{copilot, dashboard, drafting, health, render};
use crate::state::AppState;

/// Every route plus the middleware stack
///
/// Remote model calls run without a timeout layer: a hung call keeps its
/// view busy until the upstream gives up.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Dashboard
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/assets", get(dashboard::list_assets))
        .route("/assets/:asset_id", get(dashboard::get_asset))
        // Drafting
        .route(
            "/drafting",
            get(drafting::get_drafting).delete(drafting::clear_drafting),
        )
        .route(
            "/drafting/document",
            post(drafting::upload_document).layer(DefaultBodyLimit::disable()),
        )
        .route("/drafting/summary", post(drafting::generate_summary))
        .route(
            "/drafting/citation",
            get(drafting::get_citation).delete(drafting::dismiss_citation),
        )
        .route(
            "/drafting/citation/bullets/:index",
            post(drafting::cite_bullet),
        )
        .route(
            "/drafting/citation/metrics/:index",
            post(drafting::cite_metric),
        )
        .route("/drafting/export", get(drafting::export_summary))
        // Copilot
        .route(
            "/copilot/messages",
            get(copilot::list_messages)
                .post(copilot::send_message)
                .delete(copilot::reset_session),
        )
        // Formatting
        .route("/render", post(render::render_text));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::log_request))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.enabled {
        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let parsed_origins: Vec<axum::http::HeaderValue> = config
                .origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();

            cors.allow_origin(parsed_origins)
        }
    } else {
        CorsLayer::permissive()
    }
}
