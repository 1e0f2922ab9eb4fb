use std::sync::Arc;

use anyhow::Result;
use docpilot_llm::{ChatClient, ChatOptions, ChatRequest, Message};
use docpilot_types::{ChatMessage, ChatRole};

pub const SYSTEM_INSTRUCTION: &str = "You are an Asset Manager AI Copilot.
IMPORTANT RULES:
1. When presenting data lists (like monthly performance), ALWAYS use Markdown tables.
2. Keep descriptions concise.
3. Use bolding for key figures.
4. If the user asks for \"trends\", provide a table and then a summary.
5. Your tone should be professional and institutional.
6. Cite 'Internal Portfolio API' as the source for all numerical data.";

pub const CONTEXT_PREAMBLE: &str =
    "You are an Asset Manager AI Copilot. You have access to the following asset data: ";

/// Stand-in when the model returns no text
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process that request.";

/// Shown instead of an error when the model cannot be reached
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting to the data server right now. Please try again.";

pub const REPLY_SOURCES: [&str; 2] = ["Internal Portfolio API", "Institutional Risk Engine"];

/// Builds and sends one copilot turn
#[derive(Clone)]
pub struct CopilotClient {
    client: Arc<dyn ChatClient>,
    model: String,
    temperature: Option<f32>,
}

impl CopilotClient {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// System instruction, asset context, prior turns, then the query
    pub fn build_messages(query: &str, history: &[ChatMessage], asset_data: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 3);
        messages.push(Message::system(SYSTEM_INSTRUCTION));
        messages.push(Message::human(format!("{}{}", CONTEXT_PREAMBLE, asset_data)));

        for entry in history {
            messages.push(match entry.role {
                ChatRole::User => Message::human(entry.content.as_str()),
                ChatRole::Assistant => Message::ai(entry.content.as_str()),
            });
        }

        messages.push(Message::human(query));
        messages
    }

    /// Model reply text, with an empty reply replaced by [`EMPTY_REPLY`]
    pub async fn respond(
        &self,
        query: &str,
        history: &[ChatMessage],
        asset_data: &str,
    ) -> Result<String> {
        let mut options = ChatOptions::new();
        if let Some(temperature) = self.temperature {
            options = options.temperature(temperature);
        }

        let request = ChatRequest::new(&self.model, Self::build_messages(query, history, asset_data))
            .with_options(options);

        tracing::debug!(model = %self.model, history = history.len(), "Sending copilot turn");

        let response = self.client.chat(request).await?;

        Ok(response
            .content
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}
