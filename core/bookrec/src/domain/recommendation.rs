//! 推薦結果 1 件

/// content[0].text が無かったときの表示文言
pub const NO_RECOMMENDATIONS: &str = "No recommendations available";
/// 通信・解析に失敗したときの表示文言
pub const FETCH_ERROR: &str = "Error fetching recommendations. Please try again.";

/// 履歴に積まれる推薦 1 件（成功時のモデル出力か、固定のフォールバック文言）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationEntry {
    text: String,
}

impl RecommendationEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// 抽出結果から作る。None や空文字列は NO_RECOMMENDATIONS
    pub fn from_response(text: Option<String>) -> Self {
        match text {
            Some(t) if !t.is_empty() => Self::new(t),
            _ => Self::new(NO_RECOMMENDATIONS),
        }
    }

    pub fn fetch_failed() -> Self {
        Self::new(FETCH_ERROR)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
