//! 選択状態の管理（dispatch とジャンル変更時の気分一覧の導出）

use std::sync::Arc;

use crate::domain::{Action, AppState, MoodCatalog, RecommendationEntry, RequestState, Selection};

/// 状態の唯一の持ち主。変更は dispatch 経由のみ。
pub struct Store {
    state: AppState,
    request: RequestState,
    catalog: Arc<MoodCatalog>,
    #[cfg(test)]
    derivations: usize,
}

impl Store {
    /// 空のジャンルに対する導出を済ませた状態で作る
    pub fn new(catalog: Arc<MoodCatalog>) -> Self {
        let mut store = Self {
            state: AppState::default(),
            request: RequestState::default(),
            catalog,
            #[cfg(test)]
            derivations: 0,
        };
        store.derive_available_moods();
        store
    }

    /// reducer を適用する。ジャンルの値が変わったときは同じ呼び出しの中で
    /// 気分一覧を導出し直すので、古い一覧が見える瞬間は無い。
    pub fn dispatch(&mut self, action: Action) {
        let previous_genre = match &action {
            Action::SetGenre(_) => Some(self.state.selection.genre.clone()),
            _ => None,
        };
        self.apply(action);
        if let Some(previous) = previous_genre {
            if previous != self.state.selection.genre {
                self.derive_available_moods();
            }
        }
    }

    fn apply(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    fn derive_available_moods(&mut self) {
        let moods = self.catalog.moods_for(&self.state.selection.genre);
        self.apply(Action::SetAvailableMoods(moods));
        #[cfg(test)]
        {
            self.derivations += 1;
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn available_moods(&self) -> &[String] {
        &self.state.available_moods
    }

    pub fn history(&self) -> &[RecommendationEntry] {
        &self.state.history
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_in_flight()
    }

    pub(crate) fn request_state_mut(&mut self) -> &mut RequestState {
        &mut self.request
    }

    /// 気分一覧を導出した回数（起動時の 1 回を含む）
    #[cfg(test)]
    pub fn derivation_count(&self) -> usize {
        self.derivations
    }
}
