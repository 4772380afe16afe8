use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
    NotFoundResponse, UnauthorizedResponse,
};
use crate::model::user_profile::{UserProfile, UserProfileWithUser};

#[derive(Object, Deserialize, Serialize, Debug, PartialEq)]
pub struct UserProfileDetail {
    pub user_id: i32,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub pnn_number: String,
}

impl From<UserProfile> for UserProfileDetail {
    fn from(value: UserProfile) -> Self {
        Self {
            user_id: value.user_id,
            age: value.age,
            address: value.address,
            contact_number: value.contact_number,
            pnn_number: value.pnn_number,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct UserProfileListItem {
    pub user_id: i32,
    pub age: i32,
    pub address: String,
    pub contact_number: String,
    pub pnn_number: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl From<UserProfileWithUser> for UserProfileListItem {
    fn from(value: UserProfileWithUser) -> Self {
        Self {
            user_id: value.user_id,
            age: value.age,
            address: value.address,
            contact_number: value.contact_number,
            pnn_number: value.pnn_number,
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct UserProfilePageResponse {
    pub page: u32,
    pub limit: u32,
    #[oai(rename = "totalPages")]
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: u32,
    pub user_profiles: Vec<UserProfileListItem>,
}

#[derive(ApiResponse)]
pub enum UserProfilePageResponses {
    #[oai(status = 200)]
    Ok(Json<UserProfilePageResponse>),

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
pub struct UserProfileCreateResponse {
    pub message: String,
    pub user_id: i32,
}

#[derive(ApiResponse)]
pub enum UserProfileCreateResponses {
    #[oai(status = 200)]
    Ok(Json<UserProfileCreateResponse>),

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
pub enum UserProfileDetailResponses {
    #[oai(status = 200)]
    Ok(Json<UserProfileDetail>),

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
pub struct UserProfileUpdateResponse {
    pub message: String,
    pub user_profile: UserProfileDetail,
}

#[derive(ApiResponse)]
pub enum UserProfileUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<UserProfileUpdateResponse>),

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
pub enum UserProfileDeleteResponses {
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
