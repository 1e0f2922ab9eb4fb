use std::sync::Arc;

use anyhow::Context;
use docpilot_ingest::DocumentIngestor;
use docpilot_llm::ChatClient;
use docpilot_persist::{FileKeyValueStore, KeyValueStore, TranscriptRepository};
use docpilot_types::AssetCatalog;
use docpilot_views::{
    ChatSession, CopilotChat, CopilotClient, DashboardView, DraftingRoom, KeywordAssetLookup,
    SummaryGenerator,
};

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Each view owns its own lock and in-flight flag, so the state itself
/// needs no outer lock.
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard: DashboardView,
    pub drafting: DraftingRoom,
    pub copilot: CopilotChat,
}

impl AppState {
    pub fn new(
        config: Config,
        dashboard: DashboardView,
        drafting: DraftingRoom,
        copilot: CopilotChat,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dashboard,
            drafting,
            copilot,
        }
    }

    /// Wire every view from configuration with file-backed transcript storage
    pub async fn from_config(config: Config, chat_client: Arc<dyn ChatClient>) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::new(&config.copilot.storage_dir));
        Self::with_store(config, chat_client, store).await
    }

    pub async fn with_store(
        config: Config,
        chat_client: Arc<dyn ChatClient>,
        store: Arc<dyn KeyValueStore>,
    ) -> anyhow::Result<Self> {
        let catalog = match &config.dashboard.catalog_path {
            Some(path) => {
                let catalog = AssetCatalog::from_path(path)
                    .with_context(|| format!("Failed to load asset catalog from {}", path.display()))?;
                tracing::info!(assets = catalog.len(), path = %path.display(), "Asset catalog loaded");
                catalog
            }
            None => AssetCatalog::demo(),
        };
        let catalog = Arc::new(catalog);

        let mut generator = SummaryGenerator::new(Arc::clone(&chat_client), &config.llm.summary_model)
            .with_min_document_chars(config.drafting.min_document_chars);
        let mut copilot_client = CopilotClient::new(Arc::clone(&chat_client), &config.llm.chat_model);
        if let Some(temperature) = config.llm.temperature {
            generator = generator.with_temperature(temperature);
            copilot_client = copilot_client.with_temperature(temperature);
        }

        let drafting = DraftingRoom::new(DocumentIngestor::new(), generator)
            .with_settings((&config.drafting).into());

        let session = ChatSession::load(TranscriptRepository::new(store)).await;
        let copilot = CopilotChat::new(
            copilot_client,
            Arc::new(KeywordAssetLookup::new(Arc::clone(&catalog))),
            Arc::clone(&catalog),
            session,
        )
        .with_settings((&config.copilot).into());

        Ok(Self::new(
            config,
            DashboardView::new(catalog),
            drafting,
            copilot,
        ))
    }
}
