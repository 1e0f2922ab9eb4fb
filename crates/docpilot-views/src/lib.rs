//! The three DocPilot views as plain async controllers.
//!
//! Each view owns its state behind a `tokio::sync::RwLock` and guards its
//! pending remote operation with an [`InFlight`] flag, so a second request
//! while one is outstanding fails fast as busy instead of queueing.

pub mod copilot;
pub mod dashboard;
pub mod drafting;
pub mod in_flight;

pub use copilot::{
    AssetLookup, ChatSession, CopilotChat, CopilotClient, CopilotError, CopilotSettings,
    KeywordAssetLookup, EMPTY_REPLY, FALLBACK_REPLY, REPLY_SOURCES,
};
pub use dashboard::{format_millions, AssetRow, DashboardOverview, DashboardView, QuarterlyShift};
pub use drafting::{
    CitationIndex, DraftingError, DraftingRoom, DraftingSettings, DraftingSnapshot,
    SummaryGenerator,
};
pub use in_flight::{InFlight, InFlightGuard};
