//! 解析結果表示コンポーネント
//!
//! results領域は4区画（総カロリー・健康度・品目・微量栄養素）。
//! 新しい結果が届くたびに全区画を丸ごと差し替える。

use leptos::prelude::*;

use nutrisnap_common::{AnalysisResult, FoodItem, MicronutrientEntry, Quantity};

/// 欠落フィールドの表示
const PLACEHOLDER: &str = "N/A";

#[component]
pub fn ResultsPanel(analysis: RwSignal<Option<AnalysisResult>>) -> impl IntoView {
    view! {
        <div id="results" class:hidden=move || analysis.get().is_none()>
            <div id="totalCalories">
                {move || {
                    analysis
                        .get()
                        .and_then(|a| a.total_calories)
                        .filter(|c| *c != 0.0)
                        .map(|c| {
                            view! {
                                <h3>"Total Calories:"</h3>
                                <p>{format!("{} kcal", c)}</p>
                            }
                        })
                }}
            </div>
            <div id="healthRating">
                {move || {
                    analysis
                        .get()
                        .and_then(|a| a.health_rating)
                        .filter(|r| !r.is_empty())
                        .map(|r| {
                            view! {
                                <h3>"Health Rating:"</h3>
                                <p>{r}</p>
                            }
                        })
                }}
            </div>
            <div id="foodItems">
                {move || {
                    analysis.get().filter(|a| !a.items.is_empty()).map(|a| {
                        view! {
                            <h3>"Food Items:"</h3>
                            {a.items.into_iter().map(food_item_card).collect_view()}
                        }
                    })
                }}
            </div>
            <div id="micronutrients">
                {move || {
                    analysis
                        .get()
                        .and_then(|a| a.micronutrients)
                        .filter(|m| !m.is_empty())
                        .map(|m| {
                            let vitamins = micronutrient_names(&m.vitamins);
                            let minerals = micronutrient_names(&m.minerals);
                            view! {
                                <h3>"Micronutrients:"</h3>
                                {vitamins.map(|names| {
                                    view! {
                                        <p><strong>"Vitamins:"</strong> " " {names}</p>
                                    }
                                })}
                                {minerals.map(|names| {
                                    view! {
                                        <p><strong>"Minerals:"</strong> " " {names}</p>
                                    }
                                })}
                            }
                        })
                }}
            </div>
        </div>
    }
}

fn food_item_card(item: FoodItem) -> impl IntoView {
    view! {
        <div class="food-item-card">
            <h4>{display_or_placeholder(item.name.as_ref())}</h4>
            <p>{detail_line("Calories", item.calories.as_ref(), " kcal")}</p>
            <p>{detail_line("Carbs", item.carbs.as_ref(), "g")}</p>
            <p>{detail_line("Protein", item.protein.as_ref(), "g")}</p>
            <p>{detail_line("Fat", item.fat.as_ref(), "g")}</p>
            <p>{detail_line("Portion Size", item.portion_size.as_ref(), "")}</p>
        </div>
    }
}

fn display_or_placeholder(value: Option<&Quantity>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// "Calories: 95 kcal" 形式の1行を組み立てる（欠落はN/A）
fn detail_line(label: &str, value: Option<&Quantity>, suffix: &str) -> String {
    format!("{}: {}{}", label, display_or_placeholder(value), suffix)
}

/// 空でなければ ", " 区切りの名前一覧を返す
fn micronutrient_names(entries: &[MicronutrientEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    Some(
        entries
            .iter()
            .map(MicronutrientEntry::name)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
