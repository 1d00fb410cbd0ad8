//! LlmProvider で推薦サービスを実装する

use common::error::Error;
use common::llm::LlmProvider;
use std::sync::Arc;

use crate::domain::MAX_TOKENS;
use crate::ports::outbound::RecommendationService;

/// プロンプトを唯一の user メッセージとして 1 往復で送る
pub struct LlmRecommendationService {
    provider: Arc<dyn LlmProvider>,
}

impl LlmRecommendationService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

impl RecommendationService for LlmRecommendationService {
    fn recommend(&self, prompt: &str) -> Result<Option<String>, Error> {
        self.provider.complete(prompt, MAX_TOKENS)
    }
}
