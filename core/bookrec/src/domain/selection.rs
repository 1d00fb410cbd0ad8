//! 利用者の選択（ジャンル・気分・読書レベル）

use std::fmt;

/// 読書レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ReadingLevel {
    /// 表示順
    pub const ALL: [ReadingLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }

    /// ラベルから解析（大文字小文字は無視）
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|l| l.label().to_string()).collect()
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 現在の選択。空文字列 / None は未選択。
///
/// 不変条件: mood は現在の genre で選べる気分のいずれか（genre が変わると空に戻る）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub genre: String,
    pub mood: String,
    pub level: Option<ReadingLevel>,
}

impl Selection {
    /// 3 項目すべて選ばれているか
    pub fn is_complete(&self) -> bool {
        !self.genre.is_empty() && !self.mood.is_empty() && self.level.is_some()
    }
}
