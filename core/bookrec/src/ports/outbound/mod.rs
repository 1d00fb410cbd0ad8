//! Outbound ポート: アプリが外界（推薦サービス・カタログ・端末）を使うための trait

pub mod catalog_loader;
pub mod console;
pub mod recommendation_service;

pub use catalog_loader::CatalogLoader;
pub use console::Console;
pub use recommendation_service::RecommendationService;
