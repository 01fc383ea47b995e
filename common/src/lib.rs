//! NutriSnap Common Library
//!
//! Web(WASM)クライアントから使う型とレスポンス解釈:
//! - types: /analyze レスポンスの型定義
//! - response: HTTPステータス+本文テキストの解釈
//! - error: 失敗の分類
//!
//! ブラウザAPIに依存しないため、解釈ロジックはネイティブでテストできる。

pub mod types;
pub mod response;
pub mod error;

pub use types::{AnalysisResult, FoodItem, Micronutrients, MicronutrientEntry, Quantity};
pub use response::{AnalyzeOutcome, ErrorBody, interpret_response};
pub use error::AnalyzeError;
