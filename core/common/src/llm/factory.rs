//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::claude::ClaudeProvider;
use crate::llm::echo::EchoProvider;
use crate::llm::provider::LlmProvider;
use crate::ports::outbound::Log;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Claude（Anthropic Messages API）
    Claude,
    /// Echo（ネットワークを使わない）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "claude" | "anthropic" => Some(Self::Claude),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
pub enum AnyProvider {
    Claude(ClaudeProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Claude(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, query: &str, max_tokens: u32) -> Result<Value, Error> {
        match self {
            Self::Claude(p) => p.make_request_payload(query, max_tokens),
            Self::Echo(p) => p.make_request_payload(query, max_tokens),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Claude(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Claude(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None のときプロバイダのデフォルト）
/// * `base_url` - エンドポイント（Claude 用）
/// * `timeout` - HTTP タイムアウト（Claude 用）
/// * `logger` - 非 2xx 応答の記録先（Claude 用）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    logger: Arc<dyn Log>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::Claude => {
            let provider = ClaudeProvider::new(model, base_url, timeout)?.with_logger(logger);
            Ok(AnyProvider::Claude(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}
