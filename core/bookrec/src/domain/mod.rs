//! bookrec 固有のドメイン型（型と不変条件）

pub mod action;
pub mod catalog;
pub mod command;
pub mod prompt;
pub mod recommendation;
pub mod request_state;
pub mod selection;
pub mod state;

pub use action::Action;
pub use catalog::MoodCatalog;
pub use command::{BookrecCommand, ProviderOptions};
pub use prompt::{build_prompt, MAX_TOKENS};
pub use recommendation::RecommendationEntry;
pub use request_state::RequestState;
pub use selection::{ReadingLevel, Selection};
pub use state::AppState;
