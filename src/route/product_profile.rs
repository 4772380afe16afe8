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
        validation::validate_product_profile,
    },
    model::product_profile::{ProductProfile, PATCHABLE_FIELDS},
    repository::{
        product::product_exists,
        product_profile::{
            create_product_profile, delete_product_profile, get_product_profile_by_product_id,
            get_product_profile_by_product_id_for_update, paginate_product_profile,
            update_product_profile,
        },
    },
    schema::{
        common::{
            BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
            NotFoundResponse, UnauthorizedResponse,
        },
        product_profile::{
            ProductProfileCreateResponse, ProductProfileCreateResponses,
            ProductProfileDeleteResponses, ProductProfileDetailResponses,
            ProductProfilePageResponse, ProductProfilePageResponses,
            ProductProfileUpdateResponse, ProductProfileUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiProductProfileTags {
    ProductProfile,
}

pub struct ApiProductProfile;

#[OpenApi]
impl ApiProductProfile {
    #[oai(
        path = "/productprofiles",
        method = "post",
        tag = "ApiProductProfileTags::ProductProfile"
    )]
    async fn create_product_profile_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductProfileCreateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return ProductProfileCreateResponses::Unauthorized(Json(
                    UnauthorizedResponse::default(),
                ))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "create_product_profile_api", "invalid token: {}", err);
                return ProductProfileCreateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        // Validate request body
        if let Err(message) = validate_product_profile(&json.0) {
            return ProductProfileCreateResponses::BadRequest(Json(BadRequestResponse::new(
                &message,
            )));
        }
        let data: ProductProfile = match serde_json::from_value(json.0) {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "create_product_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // A profile can only hang off an existing parent row
        let parent_exists = match product_exists(&mut tx, data.product_id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "create_product_profile_api",
                        "checking product existence",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if !parent_exists {
            return ProductProfileCreateResponses::NotFound(Json(NotFoundResponse::new(
                "product does not exist. Create the product first.",
            )));
        }
        let created = match create_product_profile(&mut tx, &data).await {
            Ok(Some(val)) => val,
            Ok(None) => {
                return ProductProfileCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    "Product profile already exists",
                )))
            }
            Err(err) => {
                return ProductProfileCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "create_product_profile_api",
                        "creating product profile",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return ProductProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.product_profile",
                    "create_product_profile_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(
            product_id = created.product_id,
            requested_by = %claims.firstname,
            "product profile created"
        );
        ProductProfileCreateResponses::Ok(Json(ProductProfileCreateResponse {
            message: "Product profile created successfully".to_string(),
            product_id: created.product_id,
        }))
    }

    #[oai(path = "/productprofiles", method = "put", tag = "ApiProductProfileTags::ProductProfile")]
    async fn paginate_product_profile_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductProfilePageResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    ProductProfilePageResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "paginate_product_profile_api", "invalid token: {}", err);
                    ProductProfilePageResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let params = match parse_page_params(&json.0, "Brand") {
            Ok(val) => val,
            Err(message) => {
                return ProductProfilePageResponses::BadRequest(Json(BadRequestResponse::new(
                    &message,
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfilePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "paginate_product_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let (data, total, total_pages) = match paginate_product_profile(&mut tx, &params).await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfilePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "paginate_product_profile_api",
                        "fetching product profiles",
                        &err.to_string(),
                    ),
                ))
            }
        };

        ProductProfilePageResponses::Ok(Json(ProductProfilePageResponse {
            page: params.page,
            limit: params.limit,
            total_pages,
            total,
            product_profiles: data.into_iter().map(Into::into).collect(),
        }))
    }

    #[oai(
        path = "/productprofiles/:id",
        method = "get",
        tag = "ApiProductProfileTags::ProductProfile"
    )]
    async fn get_product_profile_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductProfileDetailResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    ProductProfileDetailResponses::Unauthorized(Json(
                        UnauthorizedResponse::default(),
                    ))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "get_product_profile_api", "invalid token: {}", err);
                    ProductProfileDetailResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return ProductProfileDetailResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid product profile ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "get_product_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_product_profile_by_product_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "get_product_profile_api",
                        "fetching product profile by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(val) => ProductProfileDetailResponses::Ok(Json(val.into())),
            None => {
                ProductProfileDetailResponses::NotFound(Json(NotFoundResponse::new(
                    "Product profile not found",
                )))
            }
        }
    }

    #[oai(
        path = "/productprofiles/:id",
        method = "put",
        tag = "ApiProductProfileTags::ProductProfile"
    )]
    async fn update_product_profile_api(
        &self,
        id: Path<String>,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductProfileUpdateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return ProductProfileUpdateResponses::Unauthorized(Json(
                    UnauthorizedResponse::default(),
                ))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "update_product_profile_api", "invalid token: {}", err);
                return ProductProfileUpdateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return ProductProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid product profile ID",
                )))
            }
        };
        let patch = match filter_patch(&json.0, PATCHABLE_FIELDS) {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "update_product_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let current = match get_product_profile_by_product_id_for_update(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "update_product_profile_api",
                        "fetching product profile data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let current = match current {
            Some(val) => val,
            None => {
                return ProductProfileUpdateResponses::NotFound(Json(NotFoundResponse::new(
                    "Product profile not found",
                )))
            }
        };

        let merged = match merge_patch(&current, &patch) {
            Ok(val) => val,
            Err(MergeError::Record(err)) => {
                return ProductProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "update_product_profile_api",
                        "merging product profile data",
                        &err,
                    ),
                ))
            }
            Err(err) => {
                return ProductProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };
        let merged_json = match serde_json::to_value(&merged) {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "update_product_profile_api",
                        "merging product profile data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(message) = validate_product_profile(&merged_json) {
            return ProductProfileUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                &message,
            )));
        }

        let rows_affected = match update_product_profile(&mut tx, &merged).await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "update_product_profile_api",
                        "updating product profile data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return ProductProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::not_applied(
                    "route.product_profile",
                    "update_product_profile_api",
                    "Product profile not updated",
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return ProductProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.product_profile",
                    "update_product_profile_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(product_id = id, requested_by = %claims.firstname, "product profile updated");
        ProductProfileUpdateResponses::Ok(Json(ProductProfileUpdateResponse {
            message: "Product profile updated successfully".to_string(),
            product_profile: merged.into(),
        }))
    }

    #[oai(
        path = "/productprofiles/:id",
        method = "delete",
        tag = "ApiProductProfileTags::ProductProfile"
    )]
    async fn delete_product_profile_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductProfileDeleteResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return ProductProfileDeleteResponses::Unauthorized(Json(
                    UnauthorizedResponse::default(),
                ))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "delete_product_profile_api", "invalid token: {}", err);
                return ProductProfileDeleteResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return ProductProfileDeleteResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid product profile ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "delete_product_profile_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let rows_affected = match delete_product_profile(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductProfileDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product_profile",
                        "delete_product_profile_api",
                        "deleting product profile by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return ProductProfileDeleteResponses::NotFound(Json(NotFoundResponse::new(
                "Product profile not found",
            )));
        }

        if let Err(err) = tx.commit().await {
            return ProductProfileDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.product_profile",
                    "delete_product_profile_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(product_id = id, requested_by = %claims.firstname, "product profile deleted");
        ProductProfileDeleteResponses::Ok(Json(MessageResponse::new(
            "Product profile deleted successfully",
        )))
    }
}
