use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::{
    BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
    NotFoundResponse, UnauthorizedResponse,
};
use crate::model::user::{User, UserWithProfile};

#[derive(Object, Deserialize, Serialize, Debug, PartialEq)]
pub struct UserDetail {
    pub user_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserDetail {
    fn from(value: User) -> Self {
        Self {
            user_id: value.user_id,
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            password: value.password,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct UserListItem {
    pub user_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub pnn_number: Option<String>,
}

impl From<UserWithProfile> for UserListItem {
    fn from(value: UserWithProfile) -> Self {
        Self {
            user_id: value.user_id,
            firstname: value.firstname,
            lastname: value.lastname,
            email: value.email,
            password: value.password,
            age: value.age,
            address: value.address,
            contact_number: value.contact_number,
            pnn_number: value.pnn_number,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct UserPageResponse {
    pub page: u32,
    pub limit: u32,
    #[oai(rename = "totalPages")]
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: u32,
    pub users: Vec<UserListItem>,
}

#[derive(ApiResponse)]
pub enum UserPageResponses {
    #[oai(status = 200)]
    Ok(Json<UserPageResponse>),

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
pub struct UserCreateResponse {
    pub message: String,
    pub user_id: i32,
}

#[derive(ApiResponse)]
pub enum UserCreateResponses {
    #[oai(status = 200)]
    Ok(Json<UserCreateResponse>),

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
pub enum UserDetailResponses {
    #[oai(status = 200)]
    Ok(Json<UserDetail>),

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
pub struct UserUpdateResponse {
    pub message: String,
    pub user: UserDetail,
}

#[derive(ApiResponse)]
pub enum UserUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<UserUpdateResponse>),

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
pub enum UserDeleteResponses {
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
