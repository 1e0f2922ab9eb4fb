//! # DocPilot
//!
//! Backend pieces for an asset-manager workstation:
//! - a **metrics dashboard** over an asset catalog
//! - a **drafting workspace** that summarizes uploaded documents with
//!   page-level citations and exports a markdown memo
//! - a **portfolio copilot** chat with a persisted transcript
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docpilot::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let app = DocPilotBuilder::new()
//!         .openai_key(std::env::var("OPENAI_API_KEY")?)
//!         .storage_dir("data")
//!         .build()
//!         .await?;
//!
//!     app.drafting.ingest(UploadedFile::new("q3.txt", "Revenue grew 10% ...")).await?;
//!     let summary = app.drafting.generate().await?;
//!     println!("{} highlights", summary.bullets.len());
//!
//!     if let Some(reply) = app.copilot.send("How is Vanguard trending?").await? {
//!         println!("{}", reply.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **docpilot-types**: domain model (assets, summaries, chat messages)
//! - **docpilot-llm**: OpenAI-compatible chat client with JSON-schema output
//! - **docpilot-ingest**: text/markdown/PDF ingestion with `[PAGE n]` markers
//! - **docpilot-render**: markdown-table formatter and summary export
//! - **docpilot-persist**: key-value storage for the copilot transcript
//! - **docpilot-views**: the dashboard, drafting and copilot controllers
//!
//! For the HTTP service see the `docpilot-api` crate in the repository.

pub use docpilot_ingest as ingest;
pub use docpilot_llm as llm;
pub use docpilot_persist as persist;
pub use docpilot_render as render;
pub use docpilot_types as types;
pub use docpilot_views as views;

pub use docpilot_ingest::{DocumentIngestor, UploadedFile};
pub use docpilot_llm::{ChatClient, OpenAIClient};
pub use docpilot_render::{format_message, render_html, Block};
pub use docpilot_types::{Asset, AssetCatalog, ChatMessage, ExecutiveSummary, SourceContext};
pub use docpilot_views::{CopilotChat, DashboardView, DraftingRoom};

/// High-level builder wiring the three views
pub mod builder;

/// Convenient prelude with commonly used types
pub mod prelude {
    pub use crate::builder::{DocPilot, DocPilotBuilder};
    pub use crate::ingest::UploadedFile;
    pub use crate::render::{format_message, Block};
    pub use crate::types::{ChatMessage, ExecutiveSummary, SourceContext};
    pub use anyhow::Result;
}
