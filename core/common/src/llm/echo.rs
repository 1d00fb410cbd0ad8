//! Echoプロバイダの実装
//!
//! 実際にLLM APIを呼び出さず、送られたプロンプトをそのまま応答テキストに包んで返します。
//! デモやテスト用に使用します。

use crate::error::Error;
use crate::llm::claude::parse_content_text;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, query: &str, max_tokens: u32) -> Result<Value, Error> {
        Ok(json!({
            "max_tokens": max_tokens,
            "messages": [Message::user(query)],
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let request: Value = serde_json::from_str(request_json)?;
        let query = request["messages"][0]["content"].as_str().unwrap_or_default();
        let response = json!({
            "content": [
                { "type": "text", "text": format!("[Echo Provider] {}", query) }
            ]
        });
        Ok(response.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        parse_content_text(response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_complete_echoes_query() {
        let text = EchoProvider::new().complete("Hello", 1000).unwrap();
        assert_eq!(text, Some("[Echo Provider] Hello".to_string()));
    }

    #[test]
    fn test_echo_provider_payload_keeps_max_tokens() {
        let payload = EchoProvider::new().make_request_payload("Hi", 1000).unwrap();
        assert_eq!(payload["max_tokens"], 1000);
        assert_eq!(payload["messages"][0]["content"], "Hi");
    }
}
