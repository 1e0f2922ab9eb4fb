use std::sync::Arc;

use docpilot_llm::{ChatClient, ChatOptions, ChatRequest, Message, ResponseFormat};
use docpilot_types::ExecutiveSummary;
use serde_json::{json, Value};

use super::error::{DraftingError, Result};

pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format from AI";

const SCHEMA_NAME: &str = "executive_summary";

/// Instruction sent ahead of the document text
pub fn summary_prompt(content: &str) -> String {
    format!(
        "Analyze the following document and provide a structured executive summary for an asset manager. \
The document contains page markers like [PAGE X]. Use these to identify the page number for each point. \
Focus on key financial performance metrics, trends, and risk factors.\n\nDocument content: {}",
        content
    )
}

/// JSON schema the model output must satisfy
///
/// Strict mode wants every property listed as required, so the optional
/// mitigation is expressed as a nullable string.
pub fn summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "bullets": {
                "type": "array",
                "description": "A structured list of 5 key highlights with source verification.",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "description": "The summary sentence." },
                        "sourceSnippet": {
                            "type": "string",
                            "description": "A short text snippet from the document that supports this bullet."
                        },
                        "pageNumber": {
                            "type": "integer",
                            "description": "The page number where this information was found based on the [PAGE X] markers."
                        }
                    },
                    "required": ["text", "sourceSnippet", "pageNumber"],
                    "additionalProperties": false
                }
            },
            "metrics": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "value": { "type": "string" },
                        "trend": { "type": "string", "enum": ["up", "down", "stable"] },
                        "confidence": { "type": "string", "enum": ["Strong", "Incomplete"] },
                        "source": {
                            "type": "string",
                            "description": "A snippet from the document justifying this metric."
                        }
                    },
                    "required": ["label", "value", "trend", "confidence", "source"],
                    "additionalProperties": false
                }
            },
            "risks": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "impact": { "type": "string", "enum": ["High", "Medium", "Low"] },
                        "description": { "type": "string" },
                        "mitigation": { "type": ["string", "null"] }
                    },
                    "required": ["impact", "description", "mitigation"],
                    "additionalProperties": false
                }
            },
            "sourceReference": {
                "type": "string",
                "description": "Main source page or section reference."
            }
        },
        "required": ["bullets", "metrics", "risks", "sourceReference"],
        "additionalProperties": false
    })
}

/// One-shot structured summarization of a document
#[derive(Clone)]
pub struct SummaryGenerator {
    client: Arc<dyn ChatClient>,
    model: String,
    temperature: Option<f32>,
    min_document_chars: usize,
}

impl SummaryGenerator {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: None,
            min_document_chars: 10,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_min_document_chars(mut self, min_chars: usize) -> Self {
        self.min_document_chars = min_chars;
        self
    }

    pub fn min_document_chars(&self) -> usize {
        self.min_document_chars
    }

    /// Summarize `content`, refusing near-empty documents without a remote call
    pub async fn summarize(&self, content: &str) -> Result<ExecutiveSummary> {
        if content.trim().chars().count() < self.min_document_chars {
            return Err(DraftingError::DocumentTooShort {
                min_chars: self.min_document_chars,
            });
        }

        let mut options =
            ChatOptions::new().response_format(ResponseFormat::json_schema(SCHEMA_NAME, summary_schema()));
        if let Some(temperature) = self.temperature {
            options = options.temperature(temperature);
        }

        let request = ChatRequest::new(&self.model, vec![Message::human(summary_prompt(content))])
            .with_options(options);

        tracing::info!(model = %self.model, chars = content.len(), "Requesting executive summary");

        let response = self
            .client
            .chat(request)
            .await
            .map_err(|e| DraftingError::Summarization(format!("{:#}", e)))?;

        let body = response.content.unwrap_or_default();
        serde_json::from_str::<ExecutiveSummary>(body.trim()).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse summary response");
            DraftingError::Summarization(INVALID_RESPONSE_FORMAT.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_document() {
        let prompt = summary_prompt("[PAGE 1]\nRevenue grew 10%\n");
        assert!(prompt.contains("page markers like [PAGE X]"));
        assert!(prompt.ends_with("Document content: [PAGE 1]\nRevenue grew 10%\n"));
    }

    #[test]
    fn test_schema_requires_top_level_fields() {
        let schema = summary_schema();
        assert_eq!(
            schema["required"],
            json!(["bullets", "metrics", "risks", "sourceReference"])
        );
        assert_eq!(
            schema["properties"]["metrics"]["items"]["properties"]["trend"]["enum"],
            json!(["up", "down", "stable"])
        );
    }
}
