use docpilot_persist::TranscriptRepository;
use docpilot_types::ChatMessage;

/// The copilot transcript and where it is persisted
///
/// Storage failures are logged and never surface to the caller; the
/// in-memory transcript stays authoritative for the running process.
pub struct ChatSession {
    repository: TranscriptRepository,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Restore the saved transcript, or start from the welcome message
    pub async fn load(repository: TranscriptRepository) -> Self {
        let messages = match repository.load().await {
            Ok(Some(messages)) if !messages.is_empty() => {
                tracing::info!(messages = messages.len(), "Restored copilot transcript");
                messages
            }
            Ok(_) => vec![ChatMessage::welcome()],
            Err(e) => {
                tracing::warn!(error = %e, key = %repository.key(), "Stored transcript unreadable, starting fresh");
                vec![ChatMessage::welcome()]
            }
        };

        Self {
            repository,
            messages,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The last `window` entries, oldest first
    pub fn recent(&self, window: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(window);
        &self.messages[start..]
    }

    pub async fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.persist().await;
    }

    /// Back to a single fresh welcome message
    pub async fn reset(&mut self) {
        self.messages = vec![ChatMessage::welcome()];
        self.persist().await;
    }

    async fn persist(&self) {
        if let Err(e) = self.repository.save(&self.messages).await {
            tracing::warn!(error = %e, key = %self.repository.key(), "Failed to save copilot transcript");
        }
    }
}
