use docpilot_llm::{ChatOptions, ChatRequest, ChatResponse, Message, ResponseFormat};
use serde_json::json;

#[test]
fn test_chat_request_creation() {
    let messages = vec![Message::human("Hello")];
    let request = ChatRequest::new("gpt-4o", messages);

    assert_eq!(request.model, "gpt-4o");
    assert_eq!(request.messages.len(), 1);
}

#[test]
fn test_chat_request_with_options() {
    let options = ChatOptions::new().temperature(0.7);

    let request = ChatRequest::new("gpt-4o", vec![Message::human("Hello")])
        .with_options(options);

    assert_eq!(request.options.temperature, Some(0.7));
    assert!(request.options.response_format.is_none());
}

#[test]
fn test_chat_options_default() {
    let options = ChatOptions::default();

    assert_eq!(options.temperature, None);
    assert_eq!(options.response_format, None);
}

#[test]
fn test_json_schema_format_serialization() {
    let format = ResponseFormat::json_schema("executive_summary", json!({"type": "object"}));
    let value = serde_json::to_value(&format).unwrap();

    assert_eq!(value["type"], "json_schema");
    assert_eq!(value["json_schema"]["name"], "executive_summary");
    assert_eq!(value["json_schema"]["strict"], true);
    assert_eq!(value["json_schema"]["schema"]["type"], "object");
}

#[test]
fn test_chat_response_from_text() {
    let response = ChatResponse::from_text("done");
    assert_eq!(response.content.as_deref(), Some("done"));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert!(response.usage.is_none());
}
