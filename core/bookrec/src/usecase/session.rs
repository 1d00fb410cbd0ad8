//! 対話モード: 1 行ずつ読んで選択・取得・表示を行う

use common::error::Error;

use crate::adapter::view;
use crate::domain::{Action, ReadingLevel};
use crate::ports::outbound::Console;
use crate::usecase::{FetchOutcome, RecommendationFetcher, Store};

const PROMPT: &str = "bookrec> ";

/// 選択対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Genre,
    Mood,
    Level,
}

/// 1 行の入力が表す意図
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// 値なしなら選択肢を表示する
    Pick(Field, Option<String>),
    Submit,
    Show,
    Help,
    Quit,
    Empty,
}

/// 1 行を解析する。未知のコマンドは Err(表示用メッセージ)
pub fn parse_intent(line: &str) -> Result<Intent, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Intent::Empty);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim().to_string())),
        None => (line, None),
    };
    let value = rest.filter(|s| !s.is_empty());
    match head.to_lowercase().as_str() {
        "genre" | "g" => Ok(Intent::Pick(Field::Genre, value)),
        "mood" | "m" => Ok(Intent::Pick(Field::Mood, value)),
        "level" | "l" => Ok(Intent::Pick(Field::Level, value)),
        "go" | "submit" => Ok(Intent::Submit),
        "show" | "s" => Ok(Intent::Show),
        "help" | "?" => Ok(Intent::Help),
        "quit" | "exit" | "q" => Ok(Intent::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
    }
}

/// 選択肢から値を選ぶ。1 始まりの番号か、大文字小文字を無視した名前
pub fn resolve_option(options: &[String], input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(input))
        .cloned()
}

pub struct InteractiveSession<'a> {
    fetcher: &'a RecommendationFetcher,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(fetcher: &'a RecommendationFetcher) -> Self {
        Self { fetcher }
    }

    /// quit か入力の終端まで繰り返す
    pub fn run(&self, store: &mut Store, console: &mut dyn Console) -> Result<(), Error> {
        console.write("AI Book Recommender");
        console.write("Discover books that match your mood and reading level. Type 'help' for commands.");
        while let Some(line) = console.read_line(PROMPT)? {
            match parse_intent(&line) {
                Ok(Intent::Quit) => break,
                Ok(intent) => self.handle(intent, store, console),
                Err(message) => console.write(&message),
            }
        }
        Ok(())
    }

    fn handle(&self, intent: Intent, store: &mut Store, console: &mut dyn Console) {
        match intent {
            Intent::Pick(field, None) => console.write(&options_view(field, store)),
            Intent::Pick(field, Some(value)) => self.pick(field, &value, store, console),
            Intent::Submit => self.submit(store, console),
            Intent::Show => {
                console.write(&view::render_selection(store.state()));
                if !store.history().is_empty() {
                    console.write("");
                    console.write(&view::render_history(store.history()));
                }
            }
            Intent::Help => console.write(HELP),
            Intent::Quit | Intent::Empty => {}
        }
    }

    fn pick(&self, field: Field, value: &str, store: &mut Store, console: &mut dyn Console) {
        match field {
            Field::Genre => {
                if value == "-" {
                    store.dispatch(Action::SetGenre(String::new()));
                    console.write("Genre cleared.");
                    return;
                }
                match resolve_option(store.catalog().genres(), value) {
                    Some(genre) => {
                        store.dispatch(Action::SetGenre(genre.clone()));
                        console.write(&format!("Genre: {}", genre));
                        console.write(&options_view(Field::Mood, store));
                    }
                    None => console.write(&format!(
                        "Unknown genre '{}'. Choose one of: {}",
                        value,
                        store.catalog().genres().join(", ")
                    )),
                }
            }
            Field::Mood => {
                if store.selection().genre.is_empty() {
                    console.write("Select a genre first.");
                    return;
                }
                if store.available_moods().is_empty() {
                    console.write(&format!("No mood options for {}.", store.selection().genre));
                    return;
                }
                match resolve_option(store.available_moods(), value) {
                    Some(mood) => {
                        store.dispatch(Action::SetMood(mood.clone()));
                        console.write(&format!("Mood: {}", mood));
                    }
                    None => console.write(&format!(
                        "Unknown mood '{}'. Choose one of: {}",
                        value,
                        store.available_moods().join(", ")
                    )),
                }
            }
            Field::Level => {
                match resolve_option(&ReadingLevel::labels(), value).and_then(|l| ReadingLevel::parse(&l)) {
                    Some(level) => {
                        store.dispatch(Action::SetLevel(Some(level)));
                        console.write(&format!("Level: {}", level));
                    }
                    None => console.write(&format!(
                        "Unknown level '{}'. Choose one of: {}",
                        value,
                        ReadingLevel::labels().join(", ")
                    )),
                }
            }
        }
    }

    fn submit(&self, store: &mut Store, console: &mut dyn Console) {
        let outcome = self
            .fetcher
            .fetch(store, &mut |s: &Store| {
                if s.is_loading() {
                    console.write(view::LOADING_LABEL)
                }
            });
        match outcome {
            FetchOutcome::Incomplete => console.write("Select a genre, mood and level first."),
            FetchOutcome::Busy => console.write("A request is already in progress."),
            FetchOutcome::Recorded(entry) => {
                let index = store.history().len() - 1;
                console.write(&view::render_entry(index, &entry));
            }
        }
    }
}

fn options_view(field: Field, store: &Store) -> String {
    let sel = store.selection();
    match field {
        Field::Genre => view::render_options("Genres", store.catalog().genres(), &sel.genre),
        Field::Mood => view::render_options("Moods", store.available_moods(), &sel.mood),
        Field::Level => {
            let current = sel.level.map(|l| l.label()).unwrap_or_default();
            view::render_options("Levels", &ReadingLevel::labels(), current)
        }
    }
}

const HELP: &str = "Commands:
  genre [name|#]   Show genres, or select one ('genre -' clears it)
  mood [name|#]    Show moods for the current genre, or select one
  level [name|#]   Show reading levels, or select one
  go               Get recommendations for the current selection
  show             Show the current selection and all recommendations
  help             Show this help
  quit             Exit";
