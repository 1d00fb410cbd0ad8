//! 端末入出力の実装

use common::error::Error;
use std::io::{self, BufRead, Write};

use crate::ports::outbound::Console;

/// 標準入力・標準出力を使う Console
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write(&mut self, text: &str) {
        println!("{}", text);
    }
}


#[cfg(test)]
pub use scripted::ScriptedConsole;
