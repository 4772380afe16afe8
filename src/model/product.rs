use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.product";

pub const PATCHABLE_FIELDS: &[&str] = &["ProductName", "Category", "Price"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "ProductID")]
    pub product_id: Option<i32>,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// Row of `product LEFT JOIN product_profile`.
#[derive(Clone, Debug, FromRow)]
pub struct ProductWithProfile {
    pub product_id: i32,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub ratings: Option<f64>,
    pub color: Option<String>,
    pub brand: Option<String>,
}
