//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        home_dir_from(
            non_empty_var("BOOKREC_HOME"),
            non_empty_var("XDG_CONFIG_HOME"),
            non_empty_var("HOME"),
        )
    }

    fn default_profile(&self) -> Option<String> {
        non_empty_var("BOOKREC_PROFILE")
    }

    fn default_model(&self) -> Option<String> {
        non_empty_var("BOOKREC_MODEL")
    }

    fn base_url(&self) -> Option<String> {
        non_empty_var("BOOKREC_BASE_URL")
    }

    fn request_timeout(&self) -> Result<Duration, Error> {
        timeout_from(non_empty_var("BOOKREC_TIMEOUT_SECS"))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn home_dir_from(
    bookrec_home: Option<String>,
    xdg_config_home: Option<String>,
    home: Option<String>,
) -> Result<HomeDir, Error> {
    if let Some(dir) = bookrec_home {
        return Ok(HomeDir::new(PathBuf::from(dir)));
    }
    let config_base = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    Ok(HomeDir::new(config_base.join("bookrec")))
}

fn timeout_from(value: Option<String>) -> Result<Duration, Error> {
    match value {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(v) => v
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                Error::env(format!(
                    "BOOKREC_TIMEOUT_SECS must be a positive integer (got '{}')",
                    v
                ))
            }),
    }
}
