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
        validation::validate_user_profile,
    },
    model::user_profile::{UserProfile, PATCHABLE_FIELDS},
    repository::{
        user::user_exists,
        user_profile::{
            create_user_profile, delete_user_profile, get_user_profile_by_user_id,
            get_user_profile_by_user_id_for_update, paginate_user_profile, update_user_profile,
        },
    },
    schema::{
        common::{
            BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
            NotFoundResponse, UnauthorizedResponse,
        },
        user_profile::{
            UserProfileCreateResponse, UserProfileCreateResponses, UserProfileDeleteResponses,
            UserProfileDetailResponses, UserProfilePageResponse, UserProfilePageResponses,
            UserProfileUpdateResponse, UserProfileUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiUserProfileTags {
    UserProfile,
}

pub struct ApiUserProfile;

#[OpenApi]
impl ApiUserProfile {
    #[oai(path = "/userprofiles", method = "post", tag = "ApiUserProfileTags::UserProfile")]
    async fn create_user_profile_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserProfileCreateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return UserProfileCreateResponses::Unauthorized(Json(
                    UnauthorizedResponse::default(),
                ))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "create_user_profile_api", "invalid token: {}", err);
                return UserProfileCreateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        // Validate request body
        if let Err(message) = validate_user_profile(&json.0) {
            return UserProfileCreateResponses::BadRequest(Json(BadRequestResponse::new(&message)));
        }
        let data: UserProfile = match serde_json::from_value(json.0) {
            Ok(val) => val,
            Err(err) => {
                return UserProfileCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "create_user_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // A profile can only hang off an existing parent row
        let parent_exists = match user_exists(&mut tx, data.user_id).await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "create_user_profile_api",
                        "checking user existence",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !parent_exists {
            return UserProfileCreateResponses::NotFound(Json(NotFoundResponse::new(
                "User does not exist. Create the user first.",
            )));
        }
        let created = match create_user_profile(&mut tx, &data).await {
            Ok(Some(val)) => val,
            Ok(None) => {
                return UserProfileCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    "User profile already exists",
                )))
            }
            Err(err) => {
                return UserProfileCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "create_user_profile_api",
                        "creating user profile",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return UserProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user_profile",
                    "create_user_profile_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(
            user_id = created.user_id,
            requested_by = %claims.firstname,
            "user profile created"
        );
        UserProfileCreateResponses::Ok(Json(UserProfileCreateResponse {
            message: "User profile created successfully".to_string(),
            user_id: created.user_id,
        }))
    }

    #[oai(path = "/userprofiles", method = "put", tag = "ApiUserProfileTags::UserProfile")]
    async fn paginate_user_profile_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserProfilePageResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    UserProfilePageResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "paginate_user_profile_api", "invalid token: {}", err);
                    UserProfilePageResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let params = match parse_page_params(&json.0, "address") {
            Ok(val) => val,
            Err(message) => {
                return UserProfilePageResponses::BadRequest(Json(BadRequestResponse::new(&message)))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserProfilePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "paginate_user_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let (data, total, total_pages) = match paginate_user_profile(&mut tx, &params).await {
            Ok(val) => val,
            Err(err) => {
                return UserProfilePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "paginate_user_profile_api",
                        "fetching user profiles",
                        &err.to_string(),
                    ),
                ))
            }
        };

        UserProfilePageResponses::Ok(Json(UserProfilePageResponse {
            page: params.page,
            limit: params.limit,
            total_pages,
            total,
            user_profiles: data.into_iter().map(Into::into).collect(),
        }))
    }

    #[oai(path = "/userprofiles/:id", method = "get", tag = "ApiUserProfileTags::UserProfile")]
    async fn get_user_profile_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserProfileDetailResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    UserProfileDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "get_user_profile_api", "invalid token: {}", err);
                    UserProfileDetailResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return UserProfileDetailResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid user profile ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "get_user_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_user_profile_by_user_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "get_user_profile_api",
                        "fetching user profile by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(val) => UserProfileDetailResponses::Ok(Json(val.into())),
            None => {
                UserProfileDetailResponses::NotFound(Json(NotFoundResponse::new(
                    "User profile not found",
                )))
            }
        }
    }

    #[oai(path = "/userprofiles/:id", method = "put", tag = "ApiUserProfileTags::UserProfile")]
    async fn update_user_profile_api(
        &self,
        id: Path<String>,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserProfileUpdateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return UserProfileUpdateResponses::Unauthorized(Json(
                    UnauthorizedResponse::default(),
                ))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "update_user_profile_api", "invalid token: {}", err);
                return UserProfileUpdateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return UserProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid user profile ID",
                )))
            }
        };
        let patch = match filter_patch(&json.0, PATCHABLE_FIELDS) {
            Ok(val) => val,
            Err(err) => {
                return UserProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "update_user_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let current = match get_user_profile_by_user_id_for_update(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "update_user_profile_api",
                        "fetching user profile data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let current = match current {
            Some(val) => val,
            None => {
                return UserProfileUpdateResponses::NotFound(Json(NotFoundResponse::new(
                    "User profile not found",
                )))
            }
        };

        let merged = match merge_patch(&current, &patch) {
            Ok(val) => val,
            Err(MergeError::Record(err)) => {
                return UserProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "update_user_profile_api",
                        "merging user profile data",
                        &err,
                    ),
                ))
            }
            Err(err) => {
                return UserProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };
        let merged_json = match serde_json::to_value(&merged) {
            Ok(val) => val,
            Err(err) => {
                return UserProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "update_user_profile_api",
                        "merging user profile data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(message) = validate_user_profile(&merged_json) {
            return UserProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(&message)));
        }

        let rows_affected = match update_user_profile(&mut tx, &merged).await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "update_user_profile_api",
                        "updating user profile data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return UserProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::not_applied(
                    "route.user_profile",
                    "update_user_profile_api",
                    "User profile not updated",
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return UserProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user_profile",
                    "update_user_profile_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(user_id = id, requested_by = %claims.firstname, "user profile updated");
        UserProfileUpdateResponses::Ok(Json(UserProfileUpdateResponse {
            message: "User profile updated successfully".to_string(),
            user_profile: merged.into(),
        }))
    }

    #[oai(path = "/userprofiles/:id", method = "delete", tag = "ApiUserProfileTags::UserProfile")]
    async fn delete_user_profile_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> UserProfileDeleteResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return UserProfileDeleteResponses::Unauthorized(Json(
                    UnauthorizedResponse::default(),
                ))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "delete_user_profile_api", "invalid token: {}", err);
                return UserProfileDeleteResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return UserProfileDeleteResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid user profile ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "delete_user_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let rows_affected = match delete_user_profile(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return UserProfileDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.user_profile",
                        "delete_user_profile_api",
                        "deleting user profile by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return UserProfileDeleteResponses::NotFound(Json(NotFoundResponse::new(
                "User profile not found",
            )));
        }

        if let Err(err) = tx.commit().await {
            return UserProfileDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.user_profile",
                    "delete_user_profile_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(user_id = id, requested_by = %claims.firstname, "user profile deleted");
        UserProfileDeleteResponses::Ok(Json(MessageResponse::new(
            "User profile deleted successfully",
        )))
    }
}
