//! 端末入出力の Outbound ポート（対話モードの描画面）

use common::error::Error;

pub trait Console {
    /// 1 行読む。入力の終端では None
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error>;

    fn write(&mut self, text: &str);
}
