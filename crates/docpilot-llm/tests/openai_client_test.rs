use docpilot_llm::{ChatClient, ChatRequest, Message, OpenAIClient};
use mockito::Matcher;
use serde_json::json;

const COMPLETION_BODY: &str = r#"{
    "id": "chatcmpl-1",
    "object": "chat.completion",
    "created": 1700000000,
    "model": "gpt-4o-mini",
    "choices": [{
        "index": 0,
        "message": {"role": "assistant", "content": "| Asset | Q/Q |\n|---|---|\n| REIT | -12.4% |\n"},
        "finish_reason": "stop"
    }],
    "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20}
}"#;

#[tokio::test]
async fn test_chat_posts_messages_and_parses_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "How is the REIT doing?"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COMPLETION_BODY)
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let request = ChatRequest::new(
        "gpt-4o-mini",
        vec![Message::system("be brief"), Message::human("How is the REIT doing?")],
    );

    let response = client.chat(request).await.unwrap();

    mock.assert_async().await;
    assert!(response.content.unwrap().contains("-12.4%"));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.unwrap().total_tokens, 20);
}

#[tokio::test]
async fn test_chat_surfaces_http_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let err = client
        .chat(ChatRequest::new("gpt-4o-mini", vec![Message::human("hi")]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_chat_rejects_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let client = OpenAIClient::new("test-key").unwrap().with_base_url(server.url());
    let result = client
        .chat(ChatRequest::new("gpt-4o-mini", vec![Message::human("hi")]))
        .await;

    assert!(result.is_err());
}
