//! LLM プロバイダの実装
//!
//! プロンプト 1 件を送り、応答テキスト 1 件を受け取る単発完了だけを扱う。

pub mod provider;
pub mod claude;
pub mod echo;
pub mod factory;

pub use provider::{LlmProvider, Message};
pub use factory::{create_provider, AnyProvider, ProviderType};
