//! 環境変数解決 Outbound ポート
//!
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::time::Duration;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. BOOKREC_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/bookrec
    /// 3. $HOME/.config/bookrec
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// -p 未指定時のプロファイル名（BOOKREC_PROFILE）
    fn default_profile(&self) -> Option<String>;

    /// -m 未指定時のモデル名（BOOKREC_MODEL）
    fn default_model(&self) -> Option<String>;

    /// エンドポイントの上書き（BOOKREC_BASE_URL）
    fn base_url(&self) -> Option<String>;

    /// HTTP タイムアウト（BOOKREC_TIMEOUT_SECS、未設定なら 60 秒）
    fn request_timeout(&self) -> Result<Duration, Error>;
}
