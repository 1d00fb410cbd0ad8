//! bookrec のユースケース（ワンショット取得と対話モード）

use common::error::Error;
use std::sync::Arc;

use crate::adapter::view;
use crate::domain::{Action, MoodCatalog, ReadingLevel};
use crate::ports::outbound::Console;
use crate::usecase::{FetchOutcome, InteractiveSession, RecommendationFetcher, Store};

pub struct BookrecUseCase {
    catalog: Arc<MoodCatalog>,
    fetcher: RecommendationFetcher,
}

impl BookrecUseCase {
    pub fn new(catalog: Arc<MoodCatalog>, fetcher: RecommendationFetcher) -> Self {
        Self { catalog, fetcher }
    }

    /// フラグで指定された 3 項目を選び、1 回だけ取得して履歴を表示する。
    ///
    /// 選択肢に無い値は usage エラー（ドロップダウンに無い値は選べないのと同じ扱い）。
    pub fn recommend_once(
        &self,
        genre: &str,
        mood: &str,
        level: &str,
        console: &mut dyn Console,
    ) -> Result<i32, Error> {
        let mut store = Store::new(Arc::clone(&self.catalog));

        let genre = pick(self.catalog.genres(), genre, "genre")?;
        store.dispatch(Action::SetGenre(genre));
        let mood = pick(store.available_moods(), mood, "mood")?;
        store.dispatch(Action::SetMood(mood));
        let level = ReadingLevel::parse(level).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown level '{}'. Choose one of: {}",
                level,
                ReadingLevel::labels().join(", ")
            ))
        })?;
        store.dispatch(Action::SetLevel(Some(level)));

        let outcome = self
            .fetcher
            .fetch(&mut store, &mut |s: &Store| {
                if s.is_loading() {
                    console.write(view::LOADING_LABEL)
                }
            });
        match outcome {
            FetchOutcome::Recorded(_) => {
                console.write(&view::render_history(store.history()));
                Ok(0)
            }
            FetchOutcome::Incomplete | FetchOutcome::Busy => Err(Error::system(
                "recommendation was not requested for a complete selection",
            )),
        }
    }

    /// 対話モード。入力の終端か quit で 0 を返す
    pub fn run_interactive(&self, console: &mut dyn Console) -> Result<i32, Error> {
        let mut store = Store::new(Arc::clone(&self.catalog));
        InteractiveSession::new(&self.fetcher).run(&mut store, console)?;
        Ok(0)
    }
}

fn pick(options: &[String], value: &str, what: &str) -> Result<String, Error> {
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(value.trim()))
        .cloned()
        .ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown {} '{}'. Choose one of: {}",
                what,
                value,
                options.join(", ")
            ))
        })
}
