mod session_tests;

use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::EnvResolver;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::MoodCatalog;

/// テスト共通のカタログ
pub(crate) fn test_catalog() -> Arc<MoodCatalog> {
    let mut moods = HashMap::new();
    moods.insert(
        "Fantasy".to_string(),
        vec!["Adventurous".to_string(), "Whimsical".to_string()],
    );
    moods.insert(
        "Mystery".to_string(),
        vec!["Cozy".to_string(), "Gritty".to_string()],
    );
    Arc::new(MoodCatalog::new(
        vec!["Fantasy".to_string(), "Mystery".to_string(), "Poetry".to_string()],
        moods,
    ))
}

/// ホームを一時ディレクトリに固定する EnvResolver
pub(crate) struct TestEnvResolver {
    pub home: PathBuf,
    pub profile: Option<String>,
}

impl EnvResolver for TestEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        Ok(HomeDir::new(self.home.clone()))
    }

    fn default_profile(&self) -> Option<String> {
        self.profile.clone()
    }

    fn default_model(&self) -> Option<String> {
        None
    }

    fn base_url(&self) -> Option<String> {
        None
    }

    fn request_timeout(&self) -> Result<Duration, Error> {
        Ok(Duration::from_secs(5))
    }
}

/// 1 回だけ固定の HTTP 応答を返すローカルサーバを立て、その URL を返す
pub(crate) fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();
        let response = format!(
            "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        reader.get_mut().write_all(response.as_bytes()).unwrap();
    });
    format!("http://{}/v1/messages", addr)
}
