//! カタログ読み込みの Outbound ポート

use crate::domain::MoodCatalog;
use common::error::Error;
use std::path::Path;

pub trait CatalogLoader: Send + Sync {
    /// `explicit` が指定されていればそのファイルを読む。
    /// 無ければ $BOOKREC_HOME/config/catalog.json、それも無ければ組み込みカタログ。
    fn load(&self, explicit: Option<&Path>) -> Result<MoodCatalog, Error>;
}
