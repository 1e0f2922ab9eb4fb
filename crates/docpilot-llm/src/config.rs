// Configuration layer for provider-agnostic LLM client creation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for an OpenAI-compatible provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    /// Base URL for the API (optional, defaults to https://api.openai.com/v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Create OpenAI provider config
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Factory for creating LLM clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create a chat client from provider configuration
    pub fn create_chat_client(config: ProviderConfig) -> Result<Arc<dyn crate::traits::ChatClient>> {
        let mut client = crate::openai::OpenAIClient::new(config.api_key)?;
        if let Some(base_url) = config.base_url.filter(|url| !url.trim().is_empty()) {
            client = client.with_base_url(base_url);
        }
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("test-key");
        assert_eq!(config.api_key, "test-key");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_base_url_override() {
        let config = ProviderConfig::openai("test-key")
            .with_base_url("https://generativelanguage.googleapis.com/v1beta/openai");
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://generativelanguage.googleapis.com/v1beta/openai")
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ProviderConfig::openai("test-key").with_base_url("http://localhost:8080/v1");

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ProviderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.base_url, deserialized.base_url);
    }

    #[test]
    fn test_factory_builds_client() {
        let client = ClientFactory::create_chat_client(ProviderConfig::openai("test-key"));
        assert!(client.is_ok());
    }
}
