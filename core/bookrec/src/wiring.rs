//! 配線: 標準アダプタで App と UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    EnvResolver, FileJsonLog, FileSystem, Log, NoopLog, StdEnvResolver, StdFileSystem,
};
use common::error::Error;
use common::llm::{create_provider, LlmProvider, ProviderType};
use common::ports::outbound::{LogLevel, LogRecord};

use crate::adapter::{LlmRecommendationService, StdCatalogLoader};
use crate::domain::ProviderOptions;
use crate::ports::outbound::CatalogLoader;
use crate::usecase::{BookrecUseCase, RecommendationFetcher};

const DEFAULT_PROFILE: &str = "claude";

/// コマンド実行に必要な依存（プロバイダはコマンドごとに遅延して作る）
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub catalog_loader: Arc<dyn CatalogLoader>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_bookrec() -> App {
    wire_bookrec_with(Arc::new(StdEnvResolver))
}

/// 環境変数解決を差し替えて組み立てる。ホームが解決できなければログは捨てる。
pub fn wire_bookrec_with(env_resolver: Arc<dyn EnvResolver>) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let home = env_resolver.resolve_home_dir().ok();
    let logger: Arc<dyn Log> = match &home {
        Some(home) => Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_path())),
        None => Arc::new(NoopLog),
    };
    let catalog_loader = Arc::new(StdCatalogLoader::new(fs, home));
    App {
        env_resolver,
        logger,
        catalog_loader,
    }
}

impl App {
    /// プロファイル・モデル・カタログから推薦ユースケースを組み立てる
    pub fn use_case(&self, options: &ProviderOptions) -> Result<BookrecUseCase, Error> {
        let catalog = Arc::new(self.catalog_loader.load(options.catalog.as_deref())?);
        let provider = self.provider(options)?;
        let service = Arc::new(LlmRecommendationService::new(provider));
        let fetcher = RecommendationFetcher::new(service, Arc::clone(&self.logger));
        Ok(BookrecUseCase::new(catalog, fetcher))
    }

    fn provider(&self, options: &ProviderOptions) -> Result<Arc<dyn LlmProvider>, Error> {
        let name = options
            .profile
            .as_ref()
            .map(|p| p.to_string())
            .or_else(|| self.env_resolver.default_profile())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        let provider_type = ProviderType::from_str(&name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider: {} (available: claude, echo)",
                name
            ))
        })?;
        let model = options
            .model
            .as_ref()
            .map(|m| m.to_string())
            .or_else(|| self.env_resolver.default_model());
        let timeout = self.env_resolver.request_timeout()?;
        let provider = create_provider(
            provider_type,
            model.clone(),
            self.env_resolver.base_url(),
            timeout,
            Arc::clone(&self.logger),
        )?;

        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "wiring", "config", "provider selected")
                .field("provider", provider_type.as_str())
                .field("model", model.unwrap_or_default())
                .field("timeout_secs", timeout.as_secs()),
        );
        Ok(Arc::new(provider))
    }
}
