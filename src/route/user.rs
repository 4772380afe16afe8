use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    core::{
        merge_patch::{filter_patch, merge_patch, MergeError},
        pagination::parse_page_params,
        security::{get_claims_from_token, BearerAuthorization, TokenError},
        utils::parse_path_id,
        validation::validate_user,
    },
    model::user::{NewUser, PATCHABLE_FIELDS},
    repository::user::{
        create_user, delete_user, get_user_by_id, get_user_by_id_for_update, paginate_user,
        update_user,
    },
    schema::{
        common::{
            BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
            NotFoundResponse, UnauthorizedResponse,
        },
        user::{
            UserCreateResponse, UserCreateResponses, UserDeleteResponses, UserDetailResponses,
            UserPageResponse, UserPageResponses, UserUpdateResponse, UserUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiUserTags {
    User,
}

pub struct ApiUser;

#[OpenApi]
impl ApiUser {
    #[oai(path = "/users", method = "post", tag = "ApiUserTags::User")]
    async fn create_user_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserCreateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return UserCreateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "create_user_api", "invalid token: {}", err);
                return UserCreateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        // Validate request body
        if let Err(message) = validate_user(&json.0) {
            return UserCreateResponses::BadRequest(Json(BadRequestResponse::new(&message)));
        }
        let data: NewUser = match serde_json::from_value(json.0) {
            Ok(val) => val,
            Err(err) => {
                return UserCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "create_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let new_user = match create_user(&mut tx, &data).await {
            Ok(val) => val,
            Err(err) => {
                return UserCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "create_user_api",
                        "creating user",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return UserCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "create_user_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(
            user_id = new_user.user_id,
            requested_by = %claims.firstname,
            "user created"
        );
        UserCreateResponses::Ok(Json(UserCreateResponse {
            message: "User created successfully".to_string(),
            user_id: new_user.user_id,
        }))
    }

    #[oai(path = "/users", method = "put", tag = "ApiUserTags::User")]
    async fn paginate_user_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserPageResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    UserPageResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "paginate_user_api", "invalid token: {}", err);
                    UserPageResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let params = match parse_page_params(&json.0, "firstname") {
            Ok(val) => val,
            Err(message) => {
                return UserPageResponses::BadRequest(Json(BadRequestResponse::new(&message)))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "paginate_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let (data, total, total_pages) = match paginate_user(&mut tx, &params).await {
            Ok(val) => val,
            Err(err) => {
                return UserPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "paginate_user_api",
                        "fetching users",
                        &err.to_string(),
                    ),
                ))
            }
        };

        UserPageResponses::Ok(Json(UserPageResponse {
            page: params.page,
            limit: params.limit,
            total_pages,
            total,
            users: data.into_iter().map(Into::into).collect(),
        }))
    }

    #[oai(path = "/users/:id", method = "get", tag = "ApiUserTags::User")]
    async fn get_user_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserDetailResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    UserDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "get_user_api", "invalid token: {}", err);
                    UserDetailResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return UserDetailResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid user ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "get_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_user_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return UserDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "get_user_api",
                        "fetching user by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(user) => UserDetailResponses::Ok(Json(user.into())),
            None => UserDetailResponses::NotFound(Json(NotFoundResponse::new("User not found"))),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = "ApiUserTags::User")]
    async fn update_user_api(
        &self,
        id: Path<String>,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserUpdateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return UserUpdateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "update_user_api", "invalid token: {}", err);
                return UserUpdateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return UserUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid user ID",
                )))
            }
        };
        let patch = match filter_patch(&json.0, PATCHABLE_FIELDS) {
            Ok(val) => val,
            Err(err) => {
                return UserUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let current = match get_user_by_id_for_update(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return UserUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "fetching user data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let current = match current {
            Some(val) => val,
            None => {
                return UserUpdateResponses::NotFound(Json(NotFoundResponse::new(
                    "User not found",
                )))
            }
        };

        let merged = match merge_patch(&current, &patch) {
            Ok(val) => val,
            Err(MergeError::Record(err)) => {
                return UserUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "merging user data",
                        &err,
                    ),
                ))
            }
            Err(err) => {
                return UserUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };
        let merged_json = match serde_json::to_value(&merged) {
            Ok(val) => val,
            Err(err) => {
                return UserUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "merging user data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(message) = validate_user(&merged_json) {
            return UserUpdateResponses::BadRequest(Json(BadRequestResponse::new(&message)));
        }

        let rows_affected = match update_user(&mut tx, &merged).await {
            Ok(val) => val,
            Err(err) => {
                return UserUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "update_user_api",
                        "updating user data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return UserUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::not_applied(
                    "route.user",
                    "update_user_api",
                    "User not updated",
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return UserUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "update_user_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(user_id = id, requested_by = %claims.firstname, "user updated");
        UserUpdateResponses::Ok(Json(UserUpdateResponse {
            message: "User updated successfully".to_string(),
            user: merged.into(),
        }))
    }

    #[oai(path = "/users/:id", method = "delete", tag = "ApiUserTags::User")]
    async fn delete_user_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserDeleteResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return UserDeleteResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "delete_user_api", "invalid token: {}", err);
                return UserDeleteResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return UserDeleteResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid user ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "delete_user_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let rows_affected = match delete_user(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return UserDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user",
                        "delete_user_api",
                        "deleting user by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return UserDeleteResponses::NotFound(Json(NotFoundResponse::new("User not found")));
        }

        if let Err(err) = tx.commit().await {
            return UserDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user",
                    "delete_user_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(user_id = id, requested_by = %claims.firstname, "user deleted");
        UserDeleteResponses::Ok(Json(MessageResponse::new("User deleted successfully")))
    }
}
