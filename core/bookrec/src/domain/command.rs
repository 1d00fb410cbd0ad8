//! bookrec コマンドの enum（Command Pattern）

use common::domain::{ModelName, ProviderName};
use std::path::PathBuf;

/// プロバイダ・カタログの指定（推薦を行うコマンドで共通）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOptions {
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    pub catalog: Option<PathBuf>,
}

/// bookrec の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum BookrecCommand {
    Help,
    /// カタログのジャンルと気分を一覧表示
    ListGenres { catalog: Option<PathBuf> },
    /// フラグで 3 項目を指定して 1 回だけ推薦を取得
    OneShot {
        genre: String,
        mood: String,
        level: String,
        options: ProviderOptions,
    },
    /// 対話モード
    Interactive { options: ProviderOptions },
}
