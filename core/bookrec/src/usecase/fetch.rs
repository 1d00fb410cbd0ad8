//! 推薦の取得（1 回の往復で 1 件を履歴に追加する）

use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::ops::Deref;
use std::sync::Arc;

use crate::domain::{build_prompt, Action, RecommendationEntry};
use crate::ports::outbound::RecommendationService;
use crate::usecase::Store;

/// fetch の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// ジャンル・気分・レベルのどれかが未選択（通信も状態変更もしない）
    Incomplete,
    /// 既にリクエスト中（何もしない）
    Busy,
    /// 履歴に追加した 1 件（成功でもフォールバックでも）
    Recorded(RecommendationEntry),
}

/// リクエスト中の Store。drop で必ず Idle に戻す。
struct InFlight<'a> {
    store: &'a mut Store,
}

impl<'a> InFlight<'a> {
    fn begin(store: &'a mut Store) -> Option<Self> {
        if store.request_state_mut().start() {
            Some(Self { store })
        } else {
            None
        }
    }
}

impl Deref for InFlight<'_> {
    type Target = Store;
    fn deref(&self) -> &Store {
        self.store
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.store.request_state_mut().finish();
    }
}

pub struct RecommendationFetcher {
    service: Arc<dyn RecommendationService>,
    logger: Arc<dyn Log>,
}

impl RecommendationFetcher {
    pub fn new(service: Arc<dyn RecommendationService>, logger: Arc<dyn Log>) -> Self {
        Self { service, logger }
    }

    /// 現在の選択で推薦を 1 件取得し、履歴に追加する。
    ///
    /// 呼び出し側にエラーは返さない。失敗はログに残し、固定文言の 1 件として記録する。
    /// `on_start` はリクエスト中になった直後に 1 回呼ばれる（読み込み表示用）。
    pub fn fetch(&self, store: &mut Store, on_start: &mut dyn FnMut(&Store)) -> FetchOutcome {
        let selection = store.selection().clone();
        let level = match selection.level {
            Some(level) if selection.is_complete() => level,
            _ => return FetchOutcome::Incomplete,
        };

        let Some(in_flight) = InFlight::begin(store) else {
            let _ = self.logger.log(&LogRecord::new(
                LogLevel::Warn,
                "usecase",
                "fetch",
                "fetch ignored: request already in flight",
            ));
            return FetchOutcome::Busy;
        };
        on_start(&in_flight);

        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "usecase", "fetch", "fetch started")
                .field("genre", selection.genre.as_str())
                .field("mood", selection.mood.as_str())
                .field("level", level.label()),
        );

        let prompt = build_prompt(&selection.genre, &selection.mood, level);
        let (entry, outcome) = match self.service.recommend(&prompt) {
            Ok(Some(text)) if !text.is_empty() => (RecommendationEntry::new(text), "ok"),
            Ok(_) => (RecommendationEntry::from_response(None), "empty"),
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Error, "usecase", "error", "recommendation fetch failed")
                        .field("error", e.to_string())
                        .field("exit_code", e.exit_code()),
                );
                (RecommendationEntry::fetch_failed(), "error")
            }
        };
        drop(in_flight);

        store.dispatch(Action::AddResponse(entry.clone()));
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "usecase", "fetch", "fetch finished")
                .field("outcome", outcome)
                .field("history_len", store.history().len()),
        );
        FetchOutcome::Recorded(entry)
    }
}
