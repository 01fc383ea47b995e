//! 解析API連携
//!
//! 選択された画像を multipart/form-data で POST /analyze へ送る。
//! レスポンスの解釈は nutrisnap-common 側で行い、ここはfetchの配管だけを持つ。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use nutrisnap_common::{interpret_response, AnalyzeOutcome};

/// 解析エンドポイント（同一オリジン配信前提）
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// 画像を解析エンドポイントへ送信する
///
/// fetch層のJsValueエラーはTransportFailureに畳み込んで返す。
pub async fn post_image(file: &File) -> AnalyzeOutcome {
    match request_analysis(file).await {
        Ok(outcome) => outcome,
        Err(err) => AnalyzeOutcome::TransportFailure(js_error_message(&err)),
    }
}

async fn request_analysis(file: &File) -> Result<AnalyzeOutcome, JsValue> {
    let form = build_form_data(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_ENDPOINT, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    let body = body.as_string().unwrap_or_default();

    Ok(interpret_response(resp.status(), &resp.status_text(), &body))
}

/// fileフィールド1つだけのmultipartボディを組み立てる
///
/// Content-Typeはブラウザがboundary付きで自動設定するため、手では付けない。
fn build_form_data(file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;
    Ok(form)
}

/// JsValueからメッセージ文字列を取り出す
fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_form_data_single_field() {
        let parts = js_sys::Array::of1(&JsValue::from_str("dummy image bytes"));
        let file = File::new_with_str_sequence(&parts, "meal.jpg").expect("File生成失敗");

        let form = build_form_data(&file).expect("FormData生成失敗");
        assert!(!form.get("file").is_undefined());
    }
}
