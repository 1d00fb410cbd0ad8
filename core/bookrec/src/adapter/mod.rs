//! アダプター（ポートの具象実装と端末への描画）

pub(crate) mod catalog_loader;
pub(crate) mod console;
pub(crate) mod llm_recommendation_service;
pub(crate) mod stub_recommendation_service;
pub(crate) mod view;

pub(crate) use catalog_loader::StdCatalogLoader;
pub(crate) use console::StdConsole;
pub(crate) use llm_recommendation_service::LlmRecommendationService;

#[cfg(test)]
pub(crate) use console::ScriptedConsole;
#[cfg(test)]
pub(crate) use stub_recommendation_service::StubRecommendationService;
