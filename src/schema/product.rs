use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
    NotFoundResponse, UnauthorizedResponse,
};
use crate::model::product::{Product, ProductWithProfile};

#[derive(Object, Deserialize, Serialize, Debug, PartialEq)]
pub struct ProductDetail {
    #[oai(rename = "ProductID")]
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    #[oai(rename = "ProductName")]
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[oai(rename = "Category")]
    #[serde(rename = "Category")]
    pub category: String,
    #[oai(rename = "Price")]
    #[serde(rename = "Price")]
    pub price: f64,
}

impl From<Product> for ProductDetail {
    fn from(value: Product) -> Self {
        Self {
            product_id: value.product_id,
            product_name: value.product_name,
            category: value.category,
            price: value.price,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct ProductListItem {
    #[oai(rename = "ProductID")]
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    #[oai(rename = "ProductName")]
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[oai(rename = "Category")]
    #[serde(rename = "Category")]
    pub category: String,
    #[oai(rename = "Price")]
    #[serde(rename = "Price")]
    pub price: f64,
    #[oai(rename = "Ratings")]
    #[serde(rename = "Ratings")]
    pub ratings: Option<f64>,
    #[oai(rename = "Color")]
    #[serde(rename = "Color")]
    pub color: Option<String>,
    #[oai(rename = "Brand")]
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
}

impl From<ProductWithProfile> for ProductListItem {
    fn from(value: ProductWithProfile) -> Self {
        Self {
            product_id: value.product_id,
            product_name: value.product_name,
            category: value.category,
            price: value.price,
            ratings: value.ratings,
            color: value.color,
            brand: value.brand,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct ProductPageResponse {
    pub page: u32,
    pub limit: u32,
    #[oai(rename = "totalPages")]
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: u32,
    pub products: Vec<ProductListItem>,
}

#[derive(ApiResponse)]
pub enum ProductPageResponses {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 403)]
    Forbidden(Json<ForbiddenResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize, Serialize)]
pub struct ProductCreateResponse {
    pub message: String,
    #[oai(rename = "ProductID")]
    #[serde(rename = "ProductID")]
    pub product_id: i32,
}

#[derive(ApiResponse)]
pub enum ProductCreateResponses {
    #[oai(status = 200)]
    Ok(Json<ProductCreateResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 403)]
    Forbidden(Json<ForbiddenResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProductDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProductDetail>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 403)]
    Forbidden(Json<ForbiddenResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize, Serialize)]
pub struct ProductUpdateResponse {
    pub message: String,
    pub product: ProductDetail,
}

#[derive(ApiResponse)]
pub enum ProductUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProductUpdateResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 403)]
    Forbidden(Json<ForbiddenResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProductDeleteResponses {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 403)]
    Forbidden(Json<ForbiddenResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
