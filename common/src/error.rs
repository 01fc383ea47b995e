//! エラー型定義

use thiserror::Error;

/// 解析リクエストの失敗
///
/// Displayがそのままユーザー向けのアラート文になる。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    /// 非2xxレスポンス（メッセージは本文のerror、なければステータス行由来）
    #[error("{message}")]
    Http { status: u16, message: String },

    /// リクエスト不達・本文デコード失敗
    #[error("{0}")]
    Transport(String),

    /// 2xx本文が運ぶアプリケーションエラー
    #[error("{0}")]
    Application(String),
}

impl AnalyzeError {
    /// ログ用の分類タグ
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Http { .. } => "http",
            AnalyzeError::Transport(_) => "transport",
            AnalyzeError::Application(_) => "application",
        }
    }
}
