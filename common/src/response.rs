//! /analyze レスポンスの解釈
//!
//! HTTPステータスと本文テキストから1回の解析リクエストの結末を組み立てる。
//! fetch層はJsValueしか扱えないため、解釈ロジックはここに分離して
//! ネイティブでテストできるようにしている。

use serde::Deserialize;

use crate::error::AnalyzeError;
use crate::types::AnalysisResult;

/// 非2xx本文から拾うエラーメッセージ
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 1回の解析リクエストの結末
#[derive(Debug, Clone)]
pub enum AnalyzeOutcome {
    /// 2xxで本文をデコードできた（本文がerrorを運ぶ場合も含む）
    Success(AnalysisResult),

    /// 非2xxステータス。本文が `{"error": ...}` ならbodyに保持する
    HttpFailure {
        status: u16,
        status_text: String,
        body: Option<ErrorBody>,
    },

    /// リクエスト不達、または2xx本文のデコード失敗
    TransportFailure(String),
}

/// HTTPステータスと本文テキストからAnalyzeOutcomeを組み立てる
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `status_text` - ステータステキスト（"Bad Request" など）
/// * `body` - 本文テキスト
///
/// # Examples
/// ```
/// use nutrisnap_common::{interpret_response, AnalyzeOutcome};
///
/// let outcome = interpret_response(400, "Bad Request", r#"{"error": "No file uploaded"}"#);
/// assert!(matches!(outcome, AnalyzeOutcome::HttpFailure { status: 400, .. }));
/// ```
pub fn interpret_response(status: u16, status_text: &str, body: &str) -> AnalyzeOutcome {
    if !(200..300).contains(&status) {
        return AnalyzeOutcome::HttpFailure {
            status,
            status_text: status_text.to_string(),
            body: serde_json::from_str(body).ok(),
        };
    }

    match serde_json::from_str::<AnalysisResult>(body) {
        Ok(result) => AnalyzeOutcome::Success(result),
        Err(e) => AnalyzeOutcome::TransportFailure(format!("invalid analysis response: {}", e)),
    }
}

impl AnalyzeOutcome {
    /// 描画できる結果か、ユーザーへ提示するエラーかに畳み込む
    ///
    /// - 非2xx: 本文のerror、なければ "Server error: <status> <statusText>"
    /// - 2xxで本文がerrorを運ぶ: アプリケーションエラー（描画しない）
    pub fn into_result(self) -> Result<AnalysisResult, AnalyzeError> {
        match self {
            AnalyzeOutcome::Success(body) => {
                if let Some(message) = body.app_error() {
                    return Err(AnalyzeError::Application(message.to_string()));
                }
                Ok(body)
            }
            AnalyzeOutcome::HttpFailure { status, status_text, body } => {
                let message = body
                    .map(|b| b.error)
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| format!("Server error: {} {}", status, status_text));
                Err(AnalyzeError::Http { status, message })
            }
            AnalyzeOutcome::TransportFailure(cause) => Err(AnalyzeError::Transport(cause)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // interpret_response テスト
    // =============================================

    #[test]
    fn test_interpret_success() {
        let body = r#"{"total_calories": 620, "health_rating": "Moderate", "items": []}"#;

        let outcome = interpret_response(200, "OK", body);
        let AnalyzeOutcome::Success(result) = &outcome else {
            panic!("Successになるはず: {:?}", outcome);
        };
        assert_eq!(result.total_calories, Some(620.0));
    }

    #[test]
    fn test_interpret_success_invalid_json_is_transport_failure() {
        // 2xxの本文デコード失敗は汎用の失敗として扱う
        let outcome = interpret_response(200, "OK", "<html>oops</html>");
        let AnalyzeOutcome::TransportFailure(cause) = &outcome else {
            panic!("TransportFailureになるはず: {:?}", outcome);
        };
        assert!(cause.starts_with("invalid analysis response:"));
    }

    #[test]
    fn test_interpret_http_failure_with_error_body() {
        let outcome = interpret_response(400, "Bad Request", r#"{"error": "No file uploaded"}"#);
        let AnalyzeOutcome::HttpFailure { status, status_text, body } = outcome else {
            panic!("HttpFailureになるはず");
        };
        assert_eq!(status, 400);
        assert_eq!(status_text, "Bad Request");
        assert_eq!(body.expect("bodyがない").error, "No file uploaded");
    }

    #[test]
    fn test_interpret_http_failure_plain_text_body() {
        let outcome = interpret_response(502, "Bad Gateway", "upstream down");
        let AnalyzeOutcome::HttpFailure { body, .. } = outcome else {
            panic!("HttpFailureになるはず");
        };
        assert!(body.is_none());
    }

    #[test]
    fn test_interpret_http_failure_json_without_error_field() {
        let outcome = interpret_response(500, "Internal Server Error", r#"{"message": "boom"}"#);
        let AnalyzeOutcome::HttpFailure { body, .. } = outcome else {
            panic!("HttpFailureになるはず");
        };
        assert!(body.is_none());
    }

    #[test]
    fn test_interpret_status_boundaries() {
        // 2xxの端はSuccess、300は失敗側
        assert!(matches!(interpret_response(299, "", "{}"), AnalyzeOutcome::Success(_)));
        assert!(matches!(
            interpret_response(300, "Multiple Choices", ""),
            AnalyzeOutcome::HttpFailure { status: 300, .. }
        ));
    }

    #[test]
    fn test_interpret_success_with_null_lists() {
        // リストがnullでも2xx本文はSuccessのまま（他領域の描画を止めない）
        let body = r#"{"total_calories": 500, "items": null, "micronutrients": {"vitamins": null, "minerals": null}}"#;

        let outcome = interpret_response(200, "OK", body);
        let AnalyzeOutcome::Success(result) = &outcome else {
            panic!("Successになるはず: {:?}", outcome);
        };
        assert_eq!(result.total_calories, Some(500.0));
        assert!(result.items.is_empty());
    }

    // =============================================
    // into_result テスト
    // =============================================

    #[test]
    fn test_into_result_success() {
        let outcome = interpret_response(200, "OK", r#"{"total_calories": 95}"#);
        let result = outcome.into_result().expect("成功になるはず");
        assert_eq!(result.total_calories, Some(95.0));
    }

    #[test]
    fn test_into_result_application_error() {
        // 2xxでも本文がerrorを運べばアラート対象（描画しない）
        let body = r#"{"error": "No nutritional data found. Please try another image or check the API response."}"#;

        let err = interpret_response(200, "OK", body).into_result().unwrap_err();
        assert_eq!(err.kind(), "application");
        assert_eq!(
            err.to_string(),
            "No nutritional data found. Please try another image or check the API response."
        );
    }

    #[test]
    fn test_into_result_application_error_beats_payload() {
        // errorとデータが同居したらerrorが勝つ
        let body = r#"{"error": "Analysis failed: timeout", "total_calories": 500}"#;

        let err = interpret_response(200, "OK", body).into_result().unwrap_err();
        assert_eq!(err.to_string(), "Analysis failed: timeout");
    }

    #[test]
    fn test_into_result_empty_error_string_is_success() {
        let result = interpret_response(200, "OK", r#"{"error": "", "total_calories": 95}"#)
            .into_result()
            .expect("空文字errorは成功扱い");
        assert_eq!(result.total_calories, Some(95.0));
    }

    #[test]
    fn test_into_result_http_message_from_body() {
        let err = interpret_response(400, "Bad Request", r#"{"error": "Invalid file"}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(err.kind(), "http");
        assert_eq!(err.to_string(), "Invalid file");
    }

    #[test]
    fn test_into_result_http_generic_fallback() {
        // 本文からメッセージを拾えなければステータス行から組み立てる
        let err = interpret_response(500, "Internal Server Error", "not json")
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500 Internal Server Error");
    }

    #[test]
    fn test_into_result_http_empty_error_field_falls_back() {
        let err = interpret_response(503, "Service Unavailable", r#"{"error": ""}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Server error: 503 Service Unavailable");
    }

    #[test]
    fn test_into_result_transport_passthrough() {
        let err = AnalyzeOutcome::TransportFailure("Failed to fetch".to_string())
            .into_result()
            .unwrap_err();
        assert_eq!(err.kind(), "transport");
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
