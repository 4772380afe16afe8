use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const TABLE_NAME: &str = "public.product_profile";

pub const PATCHABLE_FIELDS: &[&str] = &["Ratings", "Color", "Brand"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductProfile {
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    #[serde(rename = "Ratings")]
    pub ratings: f64,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Brand")]
    pub brand: String,
}

/// Row of `product_profile LEFT JOIN product`.
#[derive(Clone, Debug, FromRow)]
pub struct ProductProfileWithProduct {
    pub product_id: i32,
    pub ratings: f64,
    pub color: String,
    pub brand: String,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}
