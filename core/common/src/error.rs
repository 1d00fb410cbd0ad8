//! エラーハンドリング
//!
//! ワークスペース全体で 1 つのエラー型を使い、終了コードは sysexits に揃える。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数・入力の不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数の欠如など
    #[error("{0}")]
    Env(String),
    /// HTTP 通信の失敗・非 2xx 応答
    #[error("{0}")]
    Http(String),
    /// JSON の解析失敗
    #[error("{0}")]
    Json(String),
    /// ファイル I/O
    #[error("{0}")]
    Io(String),
    /// その他の内部エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Json(_) | Self::Io(_) => 74,
            Self::Env(_) => 78,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
