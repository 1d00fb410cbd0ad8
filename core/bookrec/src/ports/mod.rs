//! Ports & Adapters のポート定義（bookrec 固有）

pub mod inbound;
pub mod outbound;
