//! High-level builder API for wiring the DocPilot views

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::ingest::DocumentIngestor;
use crate::llm::{ChatClient, ClientFactory, ProviderConfig};
use crate::persist::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, TranscriptRepository};
use crate::types::AssetCatalog;
use crate::views::{
    ChatSession, CopilotChat, CopilotClient, CopilotSettings, DashboardView, DraftingRoom,
    DraftingSettings, KeywordAssetLookup, SummaryGenerator,
};

/// Builder for a fully wired [`DocPilot`]
///
/// # Example
///
/// ```rust,no_run
/// use docpilot::prelude::*;
///
/// # #[tokio::main]
/// # async fn main() -> Result<()> {
/// let app = DocPilotBuilder::new()
///     .openai_key("sk-...")
///     .base_url("https://generativelanguage.googleapis.com/v1beta/openai")
///     .summary_model("gemini-2.5-pro")
///     .chat_model("gemini-2.5-flash")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct DocPilotBuilder {
    // LLM
    openai_key: Option<String>,
    base_url: Option<String>,
    chat_client: Option<Arc<dyn ChatClient>>,
    summary_model: String,
    chat_model: String,
    temperature: Option<f32>,

    // Storage
    storage_dir: Option<PathBuf>,

    // Views
    catalog: Option<AssetCatalog>,
    min_document_chars: usize,
    drafting: DraftingSettings,
    copilot: CopilotSettings,
}

impl Default for DocPilotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocPilotBuilder {
    pub fn new() -> Self {
        Self {
            openai_key: None,
            base_url: None,
            chat_client: None,
            summary_model: "gpt-4o".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            temperature: None,
            storage_dir: None,
            catalog: None,
            min_document_chars: 10,
            drafting: DraftingSettings::default(),
            copilot: CopilotSettings::default(),
        }
    }

    /// Set the API key for the OpenAI-compatible endpoint
    pub fn openai_key(mut self, key: impl Into<String>) -> Self {
        self.openai_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use an existing client instead of building one from a key
    pub fn chat_client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.chat_client = Some(client);
        self
    }

    pub fn summary_model(mut self, model: impl Into<String>) -> Self {
        self.summary_model = model.into();
        self
    }

    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Persist the copilot transcript under this directory (in memory if unset)
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Asset catalog (default: the three demo holdings)
    pub fn catalog(mut self, catalog: AssetCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn min_document_chars(mut self, min_chars: usize) -> Self {
        self.min_document_chars = min_chars;
        self
    }

    pub fn preview_chars(mut self, preview_chars: usize) -> Self {
        self.drafting.preview_chars = preview_chars;
        self
    }

    pub fn history_window(mut self, window: usize) -> Self {
        self.copilot.history_window = window;
        self
    }

    /// Build the views
    ///
    /// # Errors
    ///
    /// Returns an error if neither a client nor an API key was given, or
    /// the HTTP client cannot be created.
    pub async fn build(self) -> Result<DocPilot> {
        let chat_client = match self.chat_client {
            Some(client) => client,
            None => {
                let key = self
                    .openai_key
                    .context("API key is required. Call .openai_key(key) or .chat_client(client)")?;
                let mut provider = ProviderConfig::openai(key);
                if let Some(base_url) = self.base_url {
                    provider = provider.with_base_url(base_url);
                }
                ClientFactory::create_chat_client(provider)
                    .context("Failed to create model client")?
            }
        };

        let store: Arc<dyn KeyValueStore> = match self.storage_dir {
            Some(dir) => Arc::new(FileKeyValueStore::new(dir)),
            None => Arc::new(MemoryKeyValueStore::new()),
        };

        let catalog = Arc::new(self.catalog.unwrap_or_default());

        let mut generator = SummaryGenerator::new(Arc::clone(&chat_client), self.summary_model)
            .with_min_document_chars(self.min_document_chars);
        let mut copilot_client = CopilotClient::new(chat_client, self.chat_model);
        if let Some(temperature) = self.temperature {
            generator = generator.with_temperature(temperature);
            copilot_client = copilot_client.with_temperature(temperature);
        }

        let session = ChatSession::load(TranscriptRepository::new(store)).await;

        Ok(DocPilot {
            dashboard: DashboardView::new(Arc::clone(&catalog)),
            drafting: DraftingRoom::new(DocumentIngestor::new(), generator)
                .with_settings(self.drafting),
            copilot: CopilotChat::new(
                copilot_client,
                Arc::new(KeywordAssetLookup::new(Arc::clone(&catalog))),
                catalog,
                session,
            )
            .with_settings(self.copilot),
        })
    }
}

/// The three views, ready to use
pub struct DocPilot {
    pub dashboard: DashboardView,
    pub drafting: DraftingRoom,
    pub copilot: CopilotChat,
}
