//! 推薦サービスの Outbound ポート
//!
//! プロンプト 1 件を送り、応答テキスト 1 件を受け取る。ベンダー固有の形式は実装側に閉じる。

use common::error::Error;

pub trait RecommendationService: Send + Sync {
    /// # Returns
    /// * `Ok(Some(text))` - 応答テキスト
    /// * `Ok(None)` - 応答は得られたがテキストの位置に値が無い
    /// * `Err(Error)` - 通信失敗・非 2xx・JSON でない応答
    fn recommend(&self, prompt: &str) -> Result<Option<String>, Error>;
}
