//! リクエスト中かどうかの 2 状態機械（Idle / InFlight）

/// 同時に 1 件しかリクエストを出さないための状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

impl RequestState {
    /// Idle → InFlight。既に InFlight なら何もせず false。
    pub fn start(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::InFlight;
                true
            }
            Self::InFlight => false,
        }
    }

    /// → Idle（どの状態からでも）
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}
