use docpilot_types::{
    Asset, AssetCategory, BulletPoint, ChatMessage, ChatRole, Confidence, ExecutiveSummary,
    Impact, Metric, PerformancePoint, Risk, RiskTier, SourceContext, Trend,
};
use docpilot_views::{AssetRow, DashboardOverview, DraftingSnapshot, QuarterlyShift};
use utoipa::OpenApi;

use crate::routes::{
    copilot::{SendMessageRequest, SendMessageResponse, TranscriptResponse},
    dashboard, drafting,
    drafting::CitationResponse,
    health,
    health::HealthResponse,
    render,
    render::{RenderRequest, RenderResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DocPilot API",
        description = "Asset-manager dashboard, cited document summaries and portfolio copilot"
    ),
    paths(
        health::health_check,
        dashboard::get_dashboard,
        dashboard::list_assets,
        dashboard::get_asset,
        drafting::get_drafting,
        drafting::clear_drafting,
        drafting::upload_document,
        drafting::generate_summary,
        drafting::get_citation,
        drafting::dismiss_citation,
        drafting::cite_bullet,
        drafting::cite_metric,
        drafting::export_summary,
        crate::routes::copilot::list_messages,
        crate::routes::copilot::send_message,
        crate::routes::copilot::reset_session,
        render::render_text,
    ),
    components(schemas(
        HealthResponse,
        Asset,
        AssetCategory,
        RiskTier,
        PerformancePoint,
        DashboardOverview,
        QuarterlyShift,
        AssetRow,
        DraftingSnapshot,
        ExecutiveSummary,
        BulletPoint,
        Metric,
        Risk,
        Trend,
        Confidence,
        Impact,
        SourceContext,
        CitationResponse,
        ChatMessage,
        ChatRole,
        SendMessageRequest,
        SendMessageResponse,
        TranscriptResponse,
        RenderRequest,
        RenderResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "dashboard", description = "Portfolio metrics"),
        (name = "drafting", description = "Document summaries with page citations"),
        (name = "copilot", description = "Conversational portfolio analysis"),
        (name = "render", description = "Assistant text formatting")
    )
)]
pub struct ApiDoc;
