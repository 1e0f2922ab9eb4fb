//! Domain model shared by every DocPilot crate.
//!
//! Serialized field names follow the JSON the single-page client and the
//! summarization schema use (`camelCase`, `pageNumber`, `sourceReference`).

pub mod asset;
pub mod catalog;
pub mod chat;
pub mod citation;
pub mod summary;

pub use asset::{Asset, AssetCategory, PerformancePoint, RiskTier};
pub use catalog::{AssetCatalog, CatalogError};
pub use chat::{ChatMessage, ChatRole, WELCOME_MESSAGE_ID};
pub use citation::{PageRef, SourceContext};
pub use summary::{BulletPoint, Confidence, ExecutiveSummary, Impact, Metric, Risk, Trend};
