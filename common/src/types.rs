//! 解析結果の型定義
//!
//! /analyze エンドポイントのJSONレスポンスを受ける型:
//! - AnalysisResult: レスポンス全体（総カロリー・健康度・品目・微量栄養素）
//! - FoodItem: 品目1件の栄養情報
//! - Micronutrients: ビタミン・ミネラルのリスト
//!
//! バックエンドのAI出力はフィールド欠落・型ゆらぎがあるため、
//! 全フィールドをオプショナルにし、数値/文字列の両対応はuntaggedで受ける。
//! リストのnullは欠落と同じ空リストとして読む。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 栄養解析のレスポンス全体
///
/// 未知のフィールド（originalResponseなど）は無視して読み込む。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub total_calories: Option<f64>,
    pub health_rating: Option<String>,
    #[serde(deserialize_with = "null_as_empty_vec")]
    pub items: Vec<FoodItem>,
    pub micronutrients: Option<Micronutrients>,

    /// 2xxレスポンスでもエラーを運ぶことがある（解析テキストからJSONを抽出できなかった場合など）
    pub error: Option<String>,
}

impl AnalysisResult {
    /// 本文が運ぶアプリケーションエラー（空文字はエラー扱いしない）
    pub fn app_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// 品目1件の栄養情報
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodItem {
    pub name: Option<Quantity>,
    pub calories: Option<Quantity>,
    pub carbs: Option<Quantity>,
    pub protein: Option<Quantity>,
    pub fat: Option<Quantity>,
    pub portion_size: Option<Quantity>,
}

/// 数値・文字列のどちらでも届く値
///
/// AI出力は `"carbs": 25` と `"carbs": "25g"` が混在するため両対応する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// ビタミン・ミネラルのリスト
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Micronutrients {
    #[serde(deserialize_with = "null_as_empty_vec")]
    pub vitamins: Vec<MicronutrientEntry>,
    #[serde(deserialize_with = "null_as_empty_vec")]
    pub minerals: Vec<MicronutrientEntry>,
}

impl Micronutrients {
    pub fn is_empty(&self) -> bool {
        self.vitamins.is_empty() && self.minerals.is_empty()
    }
}

/// ビタミン・ミネラル1件
///
/// `"Vitamin C"` のような文字列と `{"name": "Vitamin C"}` のような
/// オブジェクトの両方が届くため、untaggedで両対応する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MicronutrientEntry {
    Named { name: String },
    Plain(String),
}

impl MicronutrientEntry {
    /// 表示名の正規化（どちらの形でも名前を返す）
    pub fn name(&self) -> &str {
        match self {
            MicronutrientEntry::Named { name } => name,
            MicronutrientEntry::Plain(name) => name,
        }
    }
}

/// nullのリストを欠落と同じ空リストとして読む
///
/// AI出力は品目なしを `"items": null` のように返すことがあり、
/// リスト1つのnullで本文全体のデコードを落とさないようにする。
fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
