//! bookrec 共通ライブラリ
//!
//! `bookrec` コマンドから使われるエラー型・LLM プロバイダ・ポートと標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLM プロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// 標準アダプタ
pub mod adapter;
