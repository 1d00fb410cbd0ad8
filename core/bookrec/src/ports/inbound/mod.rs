//! Inbound ポート: ドライバ（main）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// 解析済みの Config を受け取り、終了コードを返す
pub trait UseCaseRunner {
    fn run(&mut self, config: Config) -> Result<i32, Error>;
}
