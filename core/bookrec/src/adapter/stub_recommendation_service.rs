//! テスト用: 固定の結果を返し、受け取ったプロンプトを記録する推薦サービス


#[cfg(test)]
pub use stub::StubRecommendationService;
