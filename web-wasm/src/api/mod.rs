//! バックエンドAPI連携

pub mod analyze;
