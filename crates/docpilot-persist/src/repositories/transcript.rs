use std::sync::Arc;

use docpilot_types::ChatMessage;

use crate::error::Result;
use crate::trait_store::KeyValueStore;

/// Key the copilot transcript lives under
pub const TRANSCRIPT_STORAGE_KEY: &str = "docpilot_chat_history";

/// Loads and saves the whole copilot transcript as one JSON array
#[derive(Clone)]
pub struct TranscriptRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl TranscriptRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: TRANSCRIPT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored transcript, `None` when nothing has been saved yet
    pub async fn load(&self) -> Result<Option<Vec<ChatMessage>>> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn save(&self, messages: &[ChatMessage]) -> Result<()> {
        let raw = serde_json::to_string(messages)?;
        self.store.set(&self.key, &raw).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.remove(&self.key).await
    }
}
