use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::asset::PerformancePoint;

pub const WELCOME_MESSAGE_ID: &str = "welcome";

const WELCOME_MESSAGE: &str = "Hello! I'm your Asset Manager Copilot. Once you've uploaded your portfolio data in the Dashboard, I can provide detailed analysis and performance trends..";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Time series attached for inline charting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<PerformancePoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            data: None,
            sources: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Greeting that opens every fresh session
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            ..Self::assistant(WELCOME_MESSAGE)
        }
    }

    pub fn with_data(mut self, data: Vec<PerformancePoint>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = Some(sources.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}
