//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"NutriSnap - Food Photo Analysis"</h1>
        </header>
    }
}
