//! 状態を変更する唯一の入口となるアクション

use super::{ReadingLevel, RecommendationEntry};

/// reducer に渡すアクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// ジャンルを設定し、気分を空に戻す
    SetGenre(String),
    SetMood(String),
    SetLevel(Option<ReadingLevel>),
    /// ジャンルから導出した気分の一覧（Store が genre 変更時に発行する）
    SetAvailableMoods(Vec<String>),
    /// 履歴の末尾に追加
    AddResponse(RecommendationEntry),
}
