use crate::domain::{BookrecCommand, ProviderOptions};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// --list-genres: カタログのジャンルと気分を表示
    pub list_genres: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --catalog: カタログ JSON のパス
    pub catalog: Option<PathBuf>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub level: Option<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("bookrec")
        .about("Get book recommendations for a genre, mood and reading level")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-genres")
                .long("list-genres")
                .help("List genres and their moods from the catalog")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("LLM profile (claude, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (e.g. claude-sonnet-4-20250514)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("catalog")
                .long("catalog")
                .value_name("path")
                .help("Genre/mood catalog JSON to use instead of the built-in one")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("genre")
                .short('g')
                .long("genre")
                .value_name("genre")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("mood")
                .long("mood")
                .value_name("mood")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("level")
                .short('l')
                .long("level")
                .value_name("level")
                .help("Beginner, Intermediate or Expert")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_genres: matches.get_flag("list-genres"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        catalog: matches.get_one::<PathBuf>("catalog").cloned(),
        genre: matches.get_one::<String>("genre").cloned(),
        mood: matches.get_one::<String>("mood").cloned(),
        level: matches.get_one::<String>("level").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    clap_complete::generate(shell, &mut build_clap_command(), "bookrec", &mut io::stdout());
}

/// Config を BookrecCommand に変換する
///
/// --genre / --mood / --level は 3 つ揃ったときだけワンショット。どれも無ければ対話モード。
pub fn config_to_command(config: Config) -> Result<BookrecCommand, Error> {
    if config.help {
        return Ok(BookrecCommand::Help);
    }

    if config.list_genres {
        return Ok(BookrecCommand::ListGenres {
            catalog: config.catalog,
        });
    }

    let options = ProviderOptions {
        profile: config.profile,
        model: config.model,
        catalog: config.catalog,
    };

    match (config.genre, config.mood, config.level) {
        (None, None, None) => Ok(BookrecCommand::Interactive { options }),
        (Some(genre), Some(mood), Some(level))
            if !genre.is_empty() && !mood.is_empty() && !level.is_empty() =>
        {
            Ok(BookrecCommand::OneShot {
                genre,
                mood,
                level,
                options,
            })
        }
        _ => Err(Error::invalid_argument(
            "--genre, --mood and --level must all be given (or none, for interactive mode)",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.list_genres);
        assert!(config.profile.is_none());
        assert!(config.genre.is_none());
    }

    #[test]
    fn test_parse_one_shot_flags() {
        let config = parse_args_from(&[
            "bookrec", "-g", "Fantasy", "--mood", "Adventurous", "-l", "Beginner", "-p", "echo",
        ])
        .unwrap();
        assert_eq!(config.genre.as_deref(), Some("Fantasy"));
        assert_eq!(config.mood.as_deref(), Some("Adventurous"));
        assert_eq!(config.level.as_deref(), Some("Beginner"));
        assert_eq!(config.profile, Some(ProviderName::new("echo")));
    }

    #[test]
    fn test_parse_catalog_and_model() {
        let config =
            parse_args_from(&["bookrec", "--catalog", "/tmp/c.json", "-m", "claude-x"]).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(config.model, Some(ModelName::new("claude-x")));
    }

    #[test]
    fn test_parse_unknown_flag_is_usage_error() {
        let err = parse_args_from(&["bookrec", "--bogus"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_config_to_command_help_takes_precedence() {
        let config = Config {
            help: true,
            list_genres: true,
            genre: Some("Fantasy".into()),
            ..Default::default()
        };
        assert_eq!(config_to_command(config).unwrap(), BookrecCommand::Help);
    }

    #[test]
    fn test_config_to_command_interactive_by_default() {
        let cmd = config_to_command(Config::default()).unwrap();
        assert!(matches!(cmd, BookrecCommand::Interactive { .. }));
    }

    #[test]
    fn test_config_to_command_one_shot() {
        let config = Config {
            genre: Some("Fantasy".into()),
            mood: Some("Epic".into()),
            level: Some("Expert".into()),
            ..Default::default()
        };
        match config_to_command(config).unwrap() {
            BookrecCommand::OneShot { genre, mood, level, .. } => {
                assert_eq!((genre.as_str(), mood.as_str(), level.as_str()), ("Fantasy", "Epic", "Expert"));
            }
            other => panic!("expected OneShot, got {:?}", other),
        }
    }

    #[test]
    fn test_config_to_command_partial_selection_is_error() {
        let config = Config {
            genre: Some("Fantasy".into()),
            ..Default::default()
        };
        let err = config_to_command(config).unwrap_err();
        assert!(err.to_string().contains("must all be given"));
        assert_eq!(err.exit_code(), 64);
    }
}
