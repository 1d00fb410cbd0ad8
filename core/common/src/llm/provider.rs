//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Claude、Echo）はこのトレイトを実装する必要があります。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザーメッセージ（唯一のメッセージとして送る）
    /// * `max_tokens` - 応答長の上限
    fn make_request_payload(&self, query: &str, max_tokens: u32) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信失敗・非 2xx 応答
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - JSON として解析できない場合
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// ペイロード生成 → 送信 → 抽出 を 1 往復で行う
    fn complete(&self, query: &str, max_tokens: u32) -> Result<Option<String>, Error> {
        let payload = self.make_request_payload(query, max_tokens)?;
        let request_json = serde_json::to_string(&payload)?;
        let response_json = self.make_http_request(&request_json)?;
        self.parse_response_text(&response_json)
    }
}

/// メッセージ構造体（リクエストの messages 要素）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}
