use std::sync::Arc;

use docpilot_types::{AssetCatalog, ChatMessage};
use thiserror::Error;
use tokio::sync::RwLock;

use super::client::{CopilotClient, FALLBACK_REPLY, REPLY_SOURCES};
use super::lookup::AssetLookup;
use super::session::ChatSession;
use crate::in_flight::InFlight;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("A copilot reply is already pending")]
    Busy,

    #[error("Copilot task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy)]
pub struct CopilotSettings {
    /// Prior transcript entries sent with each turn
    pub history_window: usize,
}

impl Default for CopilotSettings {
    fn default() -> Self {
        Self { history_window: 6 }
    }
}

/// Conversational view over the asset catalog
pub struct CopilotChat {
    client: CopilotClient,
    lookup: Arc<dyn AssetLookup>,
    catalog: Arc<AssetCatalog>,
    settings: CopilotSettings,
    session: Arc<RwLock<ChatSession>>,
    sending: InFlight,
}

impl CopilotChat {
    pub fn new(
        client: CopilotClient,
        lookup: Arc<dyn AssetLookup>,
        catalog: Arc<AssetCatalog>,
        session: ChatSession,
    ) -> Self {
        Self {
            client,
            lookup,
            catalog,
            settings: CopilotSettings::default(),
            session: Arc::new(RwLock::new(session)),
            sending: InFlight::new(),
        }
    }

    pub fn with_settings(mut self, settings: CopilotSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run one turn and return the assistant entry appended for it
    ///
    /// Blank input is ignored (`Ok(None)`). Remote failures become the
    /// fallback reply rather than an error. The turn runs on its own task,
    /// so the user entry is always followed by an assistant entry even if
    /// the caller stops waiting.
    pub async fn send(&self, input: &str) -> Result<Option<ChatMessage>, CopilotError> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let guard = self.sending.try_begin().ok_or(CopilotError::Busy)?;
        let turn = Turn {
            client: self.client.clone(),
            lookup: Arc::clone(&self.lookup),
            catalog: Arc::clone(&self.catalog),
            session: Arc::clone(&self.session),
            history_window: self.settings.history_window,
        };
        let user_message = ChatMessage::user(input);

        let reply = tokio::spawn(async move {
            let _guard = guard;
            turn.run(user_message).await
        })
        .await?;

        Ok(Some(reply))
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.session.read().await.messages().to_vec()
    }

    pub async fn reset(&self) -> Vec<ChatMessage> {
        let mut session = self.session.write().await;
        session.reset().await;
        session.messages().to_vec()
    }

    pub fn is_sending(&self) -> bool {
        self.sending.is_active()
    }
}

/// Everything one turn needs, owned so it can run detached
struct Turn {
    client: CopilotClient,
    lookup: Arc<dyn AssetLookup>,
    catalog: Arc<AssetCatalog>,
    session: Arc<RwLock<ChatSession>>,
    history_window: usize,
}

impl Turn {
    async fn run(self, user_message: ChatMessage) -> ChatMessage {
        let history = {
            let mut session = self.session.write().await;
            let history = session.recent(self.history_window).to_vec();
            session.push(user_message.clone()).await;
            history
        };

        let reply = match self.ask(&user_message.content, &history).await {
            Ok(text) => {
                let reply = ChatMessage::assistant(text).with_sources(REPLY_SOURCES);
                match self.lookup.find(&user_message.content) {
                    Some(asset) => reply.with_data(asset.performance_data),
                    None => reply,
                }
            }
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "Copilot turn failed, using fallback reply");
                ChatMessage::assistant(FALLBACK_REPLY)
            }
        };

        self.session.write().await.push(reply.clone()).await;
        reply
    }

    async fn ask(&self, query: &str, history: &[ChatMessage]) -> anyhow::Result<String> {
        let asset_data = self.catalog.snapshot_json()?;
        self.client.respond(query, history, &asset_data).await
    }
}
