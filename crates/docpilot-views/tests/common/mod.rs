use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use docpilot_llm::{ChatClient, ChatRequest, ChatResponse};

/// Replays canned replies in order and records every request
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(anyhow!(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted reply left")));
        next.map(ChatResponse::from_text)
    }
}

/// Answers every request after a fixed delay
#[allow(dead_code)]
pub struct SlowClient {
    pub delay: Duration,
    pub reply: String,
}

#[async_trait]
impl ChatClient for SlowClient {
    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse> {
        tokio::time::sleep(self.delay).await;
        Ok(ChatResponse::from_text(self.reply.clone()))
    }
}

#[allow(dead_code)]
pub const TWO_PAGE_SUMMARY: &str = r#"{
    "bullets": [
        {"text": "Revenue grew 10% in the period", "sourceSnippet": "Revenue grew 10%", "pageNumber": 1},
        {"text": "Risk exposure increased", "sourceSnippet": "Risk increased", "pageNumber": 2}
    ],
    "metrics": [
        {"label": "Revenue Growth", "value": "10%", "trend": "up", "confidence": "Strong", "source": "Revenue grew 10%"}
    ],
    "risks": [
        {"impact": "Medium", "description": "Risk increased", "mitigation": null}
    ],
    "sourceReference": "Pages 1-2"
}"#;
