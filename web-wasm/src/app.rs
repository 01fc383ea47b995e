//! メインアプリケーションコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::Url;

use nutrisnap_common::AnalysisResult;

use crate::components::{
    header::Header,
    preview_image::PreviewImage,
    results_panel::ResultsPanel,
    upload_controls::UploadControls,
};

/// アプリケーションの状態
///
/// 起動時に一度だけ構築し、ハンドラへはコピーで渡す。
/// 要素はNodeRefで保持し、都度のDOM検索はしない。
#[derive(Clone, Copy)]
pub struct ViewModel {
    /// カメラ起動用の隠しinput
    pub camera_input: NodeRef<Input>,
    /// ファイル選択用の隠しinput
    pub upload_input: NodeRef<Input>,
    /// プレビュー画像のオブジェクトURL
    pub preview_url: RwSignal<Option<String>>,
    /// 最後に描画した解析結果
    pub analysis: RwSignal<Option<AnalysisResult>>,
    /// リクエスト世代カウンタ（古いレスポンスの破棄用）
    generation: RwSignal<u64>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            camera_input: NodeRef::new(),
            upload_input: NodeRef::new(),
            preview_url: RwSignal::new(None),
            analysis: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// 新しいファイル選択を開始し、この選択の世代トークンを返す
    ///
    /// 直前のプレビューURLはここで解放する。
    pub fn begin_selection(&self, preview_url: String) -> u64 {
        if let Some(old) = self.preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        self.preview_url.set(Some(preview_url));
        self.advance_generation()
    }

    /// 世代カウンタを進め、新しい選択のトークンを返す
    fn advance_generation(&self) -> u64 {
        let token = self.generation.get_untracked() + 1;
        self.generation.set(token);
        token
    }

    /// トークンが最新の選択のものか
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.get_untracked() == token
    }

    /// 解析結果で結果領域を丸ごと差し替える
    pub fn apply_result(&self, result: AnalysisResult) {
        self.analysis.set(Some(result));
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let vm = ViewModel::new();

    view! {
        <div class="container">
            <Header />
            <UploadControls vm=vm />
            <PreviewImage url=vm.preview_url />
            <ResultsPanel analysis=vm.analysis />
        </div>
    }
}
