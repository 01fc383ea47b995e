//! 撮影・アップロード操作コンポーネント
//!
//! 見えるボタン2つから隠しファイルinputへクリックを委譲し、
//! ファイル選択時にプレビュー表示と解析リクエストを行う。

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{HtmlInputElement, Url};

use crate::api::analyze::post_image;
use crate::app::ViewModel;

#[component]
pub fn UploadControls(vm: ViewModel) -> impl IntoView {
    view! {
        <div class="upload-controls">
            <button
                id="takePhotoBtn"
                class="btn"
                on:click=move |_| {
                    if let Some(input) = vm.camera_input.get() {
                        input.click();
                    }
                }
            >
                "Take Photo"
            </button>
            <button
                id="uploadImageBtn"
                class="btn"
                on:click=move |_| {
                    if let Some(input) = vm.upload_input.get() {
                        input.click();
                    }
                }
            >
                "Upload Image"
            </button>

            <input
                type="file"
                id="cameraInput"
                accept="image/*"
                capture="environment"
                style="display: none"
                node_ref=vm.camera_input
                on:change=move |_| {
                    if let Some(input) = vm.camera_input.get() {
                        handle_image_input(vm, &input);
                    }
                }
            />
            <input
                type="file"
                id="uploadInput"
                accept="image/*"
                style="display: none"
                node_ref=vm.upload_input
                on:change=move |_| {
                    if let Some(input) = vm.upload_input.get() {
                        handle_image_input(vm, &input);
                    }
                }
            />
        </div>
    }
}

/// ファイル選択の処理
///
/// プレビュー表示 -> /analyze へPOST -> 結果描画（失敗はアラート）。
/// 選択が空なら何もしない。
fn handle_image_input(vm: ViewModel, input: &HtmlInputElement) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };

    // プレビューは選択ファイルから直接作る（ネットワーク不要）
    let url = Url::create_object_url_with_blob(&file).unwrap();
    let token = vm.begin_selection(url);

    spawn_local(async move {
        let outcome = post_image(&file).await;

        // 別の選択が始まっていたら、このレスポンスは描画もアラートもしない
        if !vm.is_current(token) {
            leptos::logging::warn!("stale analysis response discarded");
            return;
        }

        match outcome.into_result() {
            Ok(result) => vm.apply_result(result),
            Err(err) => {
                leptos::logging::error!("analysis failed ({}): {}", err.kind(), err);
                gloo::dialogs::alert(&err.to_string());
            }
        }
    });
}
