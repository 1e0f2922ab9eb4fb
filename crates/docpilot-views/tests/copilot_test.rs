mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{ScriptedClient, SlowClient};
use docpilot_persist::{KeyValueStore, MemoryKeyValueStore, TranscriptRepository, TRANSCRIPT_STORAGE_KEY};
use docpilot_types::{AssetCatalog, ChatMessage, ChatRole, WELCOME_MESSAGE_ID};
use docpilot_views::{
    ChatSession, CopilotChat, CopilotError, CopilotClient, CopilotSettings, KeywordAssetLookup, EMPTY_REPLY,
    FALLBACK_REPLY,
};

async fn chat_with_store(
    client: Arc<ScriptedClient>,
    store: Arc<MemoryKeyValueStore>,
) -> CopilotChat {
    let catalog = Arc::new(AssetCatalog::demo());
    let session = ChatSession::load(TranscriptRepository::new(store)).await;
    CopilotChat::new(
        CopilotClient::new(client, "chat-model"),
        Arc::new(KeywordAssetLookup::new(catalog.clone())),
        catalog,
        session,
    )
}

async fn chat(client: Arc<ScriptedClient>) -> CopilotChat {
    chat_with_store(client, Arc::new(MemoryKeyValueStore::new())).await
}

#[tokio::test]
async fn test_fresh_session_starts_with_welcome() {
    let chat = chat(Arc::new(ScriptedClient::new())).await;
    let messages = chat.messages().await;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, WELCOME_MESSAGE_ID);
}

#[tokio::test]
async fn test_failed_turn_appends_fallback() {
    let client = Arc::new(ScriptedClient::new().fail("503 Service Unavailable"));
    let chat = chat(client).await;

    let reply = chat.send("How is BlackRock doing?").await.unwrap().unwrap();
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, FALLBACK_REPLY);
    assert!(reply.data.is_none());
    assert!(reply.sources.is_none());

    let messages = chat.messages().await;
    assert_eq!(messages.len(), 3);
    assert!(messages[1].is_user());
    assert_eq!(messages[2], reply);
}

#[tokio::test]
async fn test_successful_turn_attaches_series_and_sources() {
    let client = Arc::new(ScriptedClient::new().reply("| Month | Value |\n|---|---|\n| Jun | $12.5M |\n"));
    let chat = chat(client.clone()).await;

    let reply = chat.send("Show Vanguard trends").await.unwrap().unwrap();

    let data = reply.data.as_ref().unwrap();
    assert_eq!(data.len(), 6);
    assert_eq!(data[5].value, 12_500_000.0);
    assert_eq!(
        reply.sources.as_deref(),
        Some(&["Internal Portfolio API".to_string(), "Institutional Risk Engine".to_string()][..])
    );

    // system, context, welcome, query
    let request = &client.requests()[0];
    assert_eq!(request.model, "chat-model");
    assert_eq!(request.messages.len(), 4);
    let context = request.messages[1].content().as_text().to_string();
    assert!(context.contains("Vanguard Global Equity"));
}

#[tokio::test]
async fn test_empty_model_reply() {
    let client = Arc::new(ScriptedClient::new().reply(""));
    let chat = chat(client).await;

    let reply = chat.send("anything new?").await.unwrap().unwrap();
    assert_eq!(reply.content, EMPTY_REPLY);
    assert!(reply.data.is_none());
    assert!(reply.sources.is_some());
}

#[tokio::test]
async fn test_blank_input_is_ignored() {
    let client = Arc::new(ScriptedClient::new());
    let chat = chat(client.clone()).await;

    assert!(chat.send("   \n").await.unwrap().is_none());
    assert_eq!(chat.messages().await.len(), 1);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_history_window_is_bounded() {
    let mut client = ScriptedClient::new();
    for idx in 0..5 {
        client = client.reply(format!("answer {}", idx));
    }
    let client = Arc::new(client);
    let chat = chat(client.clone())
        .await
        .with_settings(CopilotSettings { history_window: 3 });

    for idx in 0..5 {
        chat.send(&format!("question {}", idx)).await.unwrap();
    }

    let last = client.requests().pop().unwrap();
    // system + context + 3 history entries + query
    assert_eq!(last.messages.len(), 6);
    let history: Vec<_> = last.messages[2..5]
        .iter()
        .map(|m| m.content().as_text().to_string())
        .collect();
    assert_eq!(history, vec!["answer 2", "question 3", "answer 3"]);
}

#[tokio::test]
async fn test_transcript_survives_restart() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let client = Arc::new(ScriptedClient::new().reply("**$45.9M** total"));

    let first = chat_with_store(client.clone(), store.clone()).await;
    first.send("total aum?").await.unwrap();
    let before = first.messages().await;

    let second = chat_with_store(client, store).await;
    assert_eq!(second.messages().await, before);
}

#[tokio::test]
async fn test_unreadable_transcript_starts_fresh() {
    let store = Arc::new(MemoryKeyValueStore::new());
    store.set(TRANSCRIPT_STORAGE_KEY, "garbage").await.unwrap();

    let chat = chat_with_store(Arc::new(ScriptedClient::new()), store).await;
    let messages = chat.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, WELCOME_MESSAGE_ID);
}

#[tokio::test]
async fn test_reset_persists_welcome() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let client = Arc::new(ScriptedClient::new().reply("ok"));
    let chat = chat_with_store(client, store.clone()).await;

    chat.send("hello").await.unwrap();
    let messages = chat.reset().await;
    assert_eq!(messages.len(), 1);

    let stored: Vec<ChatMessage> =
        serde_json::from_str(&store.get(TRANSCRIPT_STORAGE_KEY).await.unwrap().unwrap()).unwrap();
    assert_eq!(stored, messages);
}

#[tokio::test]
async fn test_abandoned_send_still_ends_with_assistant_entry() {
    let store = Arc::new(MemoryKeyValueStore::new());
    let catalog = Arc::new(AssetCatalog::demo());
    let client = Arc::new(SlowClient {
        delay: Duration::from_millis(200),
        reply: "Vanguard is up 2.1% this quarter.".to_string(),
    });
    let session = ChatSession::load(TranscriptRepository::new(store.clone())).await;
    let chat = CopilotChat::new(
        CopilotClient::new(client, "chat-model"),
        Arc::new(KeywordAssetLookup::new(catalog.clone())),
        catalog,
        session,
    );

    let abandoned = tokio::time::timeout(Duration::from_millis(50), chat.send("Vanguard?")).await;
    assert!(abandoned.is_err());

    // The turn keeps running and keeps the slot claimed
    assert!(chat.is_sending());
    assert!(matches!(chat.send("Another?").await, Err(CopilotError::Busy)));

    tokio::time::timeout(Duration::from_secs(5), async {
        while chat.is_sending() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    let roles: Vec<ChatRole> = chat.messages().await.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);

    let stored = TranscriptRepository::new(store).load().await.unwrap().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2].content, "Vanguard is up 2.1% this quarter.");
    assert!(stored[2].data.is_some());
}
