//! Claude（Anthropic Messages API）プロバイダの実装

use crate::adapter::NoopLog;
use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::{json, Value};
use std::env;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1/messages";
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claudeプロバイダ
pub struct ClaudeProvider {
    model: String,
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Log>,
}

impl ClaudeProvider {
    /// 新しいClaudeプロバイダを作成（API キーは ANTHROPIC_API_KEY から読む）
    ///
    /// # Arguments
    /// * `model` - モデル名（デフォルト: DEFAULT_MODEL）
    /// * `base_url` - エンドポイント（デフォルト: DEFAULT_BASE_URL）
    /// * `timeout` - リクエスト全体のタイムアウト
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::env(format!("{} environment variable is not set", API_KEY_ENV)))?;
        Self::with_api_key(api_key, model, base_url, timeout)
    }

    /// API キーを明示して作成する
    pub fn with_api_key(
        api_key: impl Into<String>,
        model: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
            client,
            logger: Arc::new(NoopLog),
        })
    }

    /// 非 2xx 応答の記録先を設定する
    pub fn with_logger(mut self, logger: Arc<dyn Log>) -> Self {
        self.logger = logger;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl LlmProvider for ClaudeProvider {
    fn name(&self) -> &str {
        "claude"
    }

    fn make_request_payload(&self, query: &str, max_tokens: u32) -> Result<Value, Error> {
        Ok(json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "messages": [Message::user(query)],
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // JSON 本文なら応答として扱い、テキストの有無は parse_response_text に任せる
            let body = serde_json::from_str::<Value>(&response_text).map_err(|_| {
                Error::http(format!("Claude API error ({}): {}", status, response_text))
            })?;
            let error_msg = body["error"]["message"].as_str().unwrap_or_default();
            let _ = self.logger.log(
                &LogRecord::new(LogLevel::Warn, "adapter", "http", "Claude API returned an error status")
                    .field("status", status.as_u16())
                    .field("error", error_msg),
            );
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        parse_content_text(response_json)
    }
}

/// Messages API 形式の応答から content[0].text を取り出す
///
/// Echo プロバイダも同じ形の応答を返すので共有する。
pub(crate) fn parse_content_text(response_json: &str) -> Result<Option<String>, Error> {
    let v: Value = serde_json::from_str(response_json)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
    Ok(v["content"][0]["text"].as_str().map(str::to_string))
}
