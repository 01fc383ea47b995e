//! プレビュー画像コンポーネント

use leptos::prelude::*;

#[component]
pub fn PreviewImage(url: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <img
            id="preview"
            alt="Selected food photo"
            src=move || url.get().unwrap_or_default()
            style:display=move || if url.get().is_some() { "block" } else { "none" }
        />
    }
}
