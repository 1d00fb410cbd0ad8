//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// bookrec のホームディレクトリ（config/ と log/ を置く）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// 上書き用カタログファイルのパス（$BOOKREC_HOME/config/catalog.json）
    pub fn catalog_path(&self) -> PathBuf {
        self.0.join("config").join("catalog.json")
    }

    /// JSONL ログファイルのパス（$BOOKREC_HOME/log/bookrec.jsonl）
    pub fn log_path(&self) -> PathBuf {
        self.0.join("log").join("bookrec.jsonl")
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

/// プロバイダ（プロファイル）名。例: claude, echo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderName(String);

impl ProviderName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ProviderName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// モデル名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir_paths() {
        let home = HomeDir::new("/tmp/bookrec");
        assert_eq!(
            home.catalog_path(),
            PathBuf::from("/tmp/bookrec/config/catalog.json")
        );
        assert_eq!(home.log_path(), PathBuf::from("/tmp/bookrec/log/bookrec.jsonl"));
    }

    #[test]
    fn test_provider_name_deref() {
        let name = ProviderName::new("echo");
        assert_eq!(&*name, "echo");
        assert_eq!(name.to_string(), "echo");
    }
}
