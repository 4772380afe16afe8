use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
    NotFoundResponse, UnauthorizedResponse,
};
use crate::model::product_profile::{ProductProfile, ProductProfileWithProduct};

#[derive(Object, Deserialize, Serialize, Debug, PartialEq)]
pub struct ProductProfileDetail {
    #[oai(rename = "ProductID")]
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    #[oai(rename = "Ratings")]
    #[serde(rename = "Ratings")]
    pub ratings: f64,
    #[oai(rename = "Color")]
    #[serde(rename = "Color")]
    pub color: String,
    #[oai(rename = "Brand")]
    #[serde(rename = "Brand")]
    pub brand: String,
}

impl From<ProductProfile> for ProductProfileDetail {
    fn from(value: ProductProfile) -> Self {
        Self {
            product_id: value.product_id,
            ratings: value.ratings,
            color: value.color,
            brand: value.brand,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct ProductProfileListItem {
    #[oai(rename = "ProductID")]
    #[serde(rename = "ProductID")]
    pub product_id: i32,
    #[oai(rename = "Ratings")]
    #[serde(rename = "Ratings")]
    pub ratings: f64,
    #[oai(rename = "Color")]
    #[serde(rename = "Color")]
    pub color: String,
    #[oai(rename = "Brand")]
    #[serde(rename = "Brand")]
    pub brand: String,
    #[oai(rename = "ProductName")]
    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,
    #[oai(rename = "Category")]
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[oai(rename = "Price")]
    #[serde(rename = "Price")]
    pub price: Option<f64>,
}

impl From<ProductProfileWithProduct> for ProductProfileListItem {
    fn from(value: ProductProfileWithProduct) -> Self {
        Self {
            product_id: value.product_id,
            ratings: value.ratings,
            color: value.color,
            brand: value.brand,
            product_name: value.product_name,
            category: value.category,
            price: value.price,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct ProductProfilePageResponse {
    pub page: u32,
    pub limit: u32,
    #[oai(rename = "totalPages")]
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: u32,
    pub product_profiles: Vec<ProductProfileListItem>,
}

#[derive(ApiResponse)]
pub enum ProductProfilePageResponses {
    #[oai(status = 200)]
    Ok(Json<ProductProfilePageResponse>),

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
pub struct ProductProfileCreateResponse {
    pub message: String,
    #[oai(rename = "ProductID")]
    #[serde(rename = "ProductID")]
    pub product_id: i32,
}

#[derive(ApiResponse)]
pub enum ProductProfileCreateResponses {
    #[oai(status = 200)]
    Ok(Json<ProductProfileCreateResponse>),

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
pub enum ProductProfileDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProductProfileDetail>),

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
pub struct ProductProfileUpdateResponse {
    pub message: String,
    pub product_profile: ProductProfileDetail,
}

#[derive(ApiResponse)]
pub enum ProductProfileUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProductProfileUpdateResponse>),

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
pub enum ProductProfileDeleteResponses {
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
