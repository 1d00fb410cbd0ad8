//! ユースケース層

pub mod app;
pub mod fetch;
pub mod session;
pub mod store;

pub use app::BookrecUseCase;
pub use fetch::{FetchOutcome, RecommendationFetcher};
pub use session::InteractiveSession;
pub use store::Store;
