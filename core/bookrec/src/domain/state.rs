//! 画面に出す状態と reducer

use super::{Action, RecommendationEntry, Selection};

/// 選択・導出済みの気分一覧・推薦履歴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub selection: Selection,
    /// 現在のジャンルで選べる気分（導出キャッシュ）
    pub available_moods: Vec<String>,
    /// 追記のみ。挿入順＝表示順
    pub history: Vec<RecommendationEntry>,
}

impl AppState {
    /// 純粋な状態遷移。すべてのアクションは全域で、失敗しない。
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetGenre(genre) => Self {
                selection: Selection {
                    genre,
                    mood: String::new(),
                    ..self.selection
                },
                ..self
            },
            Action::SetMood(mood) => Self {
                selection: Selection {
                    mood,
                    ..self.selection
                },
                ..self
            },
            Action::SetLevel(level) => Self {
                selection: Selection {
                    level,
                    ..self.selection
                },
                ..self
            },
            Action::SetAvailableMoods(available_moods) => Self {
                available_moods,
                ..self
            },
            Action::AddResponse(entry) => {
                let mut history = self.history;
                history.push(entry);
                Self { history, ..self }
            }
        }
    }
}
