mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::BookrecCommand;
use ports::inbound::UseCaseRunner;
use ports::outbound::Console;
use wiring::{wire_bookrec, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
    console: Box<dyn Console>,
}

impl UseCaseRunner for Runner {
    fn run(&mut self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .field("command", command_name),
        );

        let result = match cmd {
            BookrecCommand::Help => {
                self.console.write(HELP);
                Ok(0)
            }
            BookrecCommand::ListGenres { catalog } => self.list_genres(catalog.as_deref()),
            BookrecCommand::OneShot {
                genre,
                mood,
                level,
                options,
            } => self.app.use_case(&options).and_then(|use_case| {
                use_case.recommend_once(&genre, &mood, &level, self.console.as_mut())
            }),
            BookrecCommand::Interactive { options } => self
                .app
                .use_case(&options)
                .and_then(|use_case| use_case.run_interactive(self.console.as_mut())),
        };

        let code = result.as_ref().copied().unwrap_or_else(|e| e.exit_code());
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

impl Runner {
    fn list_genres(&mut self, catalog: Option<&std::path::Path>) -> Result<i32, Error> {
        let catalog = self.app.catalog_loader.load(catalog)?;
        for genre in catalog.genres() {
            let moods = catalog.moods_for(genre);
            self.console
                .write(&format!("{}: {}", genre, moods.join(", ")));
        }
        Ok(0)
    }
}

fn cmd_name_for_log(cmd: &BookrecCommand) -> &'static str {
    match cmd {
        BookrecCommand::Help => "help",
        BookrecCommand::ListGenres { .. } => "list-genres",
        BookrecCommand::OneShot { .. } => "one-shot",
        BookrecCommand::Interactive { .. } => "interactive",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("bookrec: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let mut runner = Runner {
        app: wire_bookrec(),
        console: Box::new(adapter::StdConsole),
    };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: bookrec [options] [--genre <genre> --mood <mood> --level <level>]");
}

const HELP: &str = "Usage: bookrec [options] [--genre <genre> --mood <mood> --level <level>]
Options:
  -h, --help                 Show this help message
  -g, --genre <genre>        Genre (see --list-genres)
      --mood <mood>          Mood; must be one of the moods of the genre
  -l, --level <level>        Reading level: Beginner, Intermediate or Expert
  -p, --profile <profile>    LLM profile: claude (default) or echo (no network)
  -m, --model <model>        Model name. Default: claude-sonnet-4-20250514
      --catalog <path>       Genre/mood catalog JSON instead of the built-in one
      --list-genres          List genres and their moods
      --generate <shell>     Generate shell completion script (bash, zsh, fish)

Without --genre/--mood/--level, bookrec starts an interactive session.

Environment:
  ANTHROPIC_API_KEY       API key for the claude profile
  BOOKREC_HOME            Home directory (config/catalog.json, log/bookrec.jsonl).
                          If unset, $XDG_CONFIG_HOME/bookrec or ~/.config/bookrec is used.
  BOOKREC_PROFILE         Default profile when -p is not given
  BOOKREC_MODEL           Default model when -m is not given
  BOOKREC_BASE_URL        Override the API endpoint
  BOOKREC_TIMEOUT_SECS    Request timeout in seconds (default 60)

Examples:
  bookrec --genre Fantasy --mood Adventurous --level Beginner
  bookrec -p echo -g Mystery --mood Cozy -l Expert
  bookrec";
