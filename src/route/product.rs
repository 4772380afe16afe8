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
        validation::validate_product,
    },
    model::product::{NewProduct, PATCHABLE_FIELDS},
    repository::product::{
        create_product, delete_product, get_product_by_id, get_product_by_id_for_update,
        paginate_product, update_product,
    },
    schema::{
        common::{
            BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, MessageResponse,
            NotFoundResponse, UnauthorizedResponse,
        },
        product::{
            ProductCreateResponse, ProductCreateResponses, ProductDeleteResponses,
            ProductDetailResponses, ProductPageResponse, ProductPageResponses,
            ProductUpdateResponse, ProductUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiProductTags {
    Product,
}

pub struct ApiProduct;

#[OpenApi]
impl ApiProduct {
    #[oai(path = "/products", method = "post", tag = "ApiProductTags::Product")]
    async fn create_product_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductCreateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return ProductCreateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "create_product_api", "invalid token: {}", err);
                return ProductCreateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        // Validate request body
        if let Err(message) = validate_product(&json.0) {
            return ProductCreateResponses::BadRequest(Json(BadRequestResponse::new(&message)));
        }
        let data: NewProduct = match serde_json::from_value(json.0) {
            Ok(val) => val,
            Err(err) => {
                return ProductCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "create_product_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let created = match create_product(&mut tx, &data).await {
            Ok(Some(val)) => val,
            // An explicit ProductID collided with an existing product
            Ok(None) => {
                return ProductCreateResponses::BadRequest(Json(BadRequestResponse::new(
                    &format!(
                        "Product with ProductID {} already exists",
                        data.product_id.unwrap_or_default()
                    ),
                )))
            }
            Err(err) => {
                return ProductCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "create_product_api",
                        "creating product",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return ProductCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.product",
                    "create_product_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(
            product_id = created.product_id,
            requested_by = %claims.firstname,
            "product created"
        );
        ProductCreateResponses::Ok(Json(ProductCreateResponse {
            message: "Product created successfully".to_string(),
            product_id: created.product_id,
        }))
    }

    #[oai(path = "/products", method = "put", tag = "ApiProductTags::Product")]
    async fn paginate_product_api(
        &self,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductPageResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    ProductPageResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "paginate_product_api", "invalid token: {}", err);
                    ProductPageResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let params = match parse_page_params(&json.0, "ProductName") {
            Ok(val) => val,
            Err(message) => {
                return ProductPageResponses::BadRequest(Json(BadRequestResponse::new(&message)))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "paginate_product_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let (data, total, total_pages) = match paginate_product(&mut tx, &params).await {
            Ok(val) => val,
            Err(err) => {
                return ProductPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "paginate_product_api",
                        "fetching products",
                        &err.to_string(),
                    ),
                ))
            }
        };

        ProductPageResponses::Ok(Json(ProductPageResponse {
            page: params.page,
            limit: params.limit,
            total_pages,
            total,
            products: data.into_iter().map(Into::into).collect(),
        }))
    }

    #[oai(path = "/products/:id", method = "get", tag = "ApiProductTags::Product")]
    async fn get_product_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductDetailResponses {
        // Validate user token
        if let Err(err) = get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            return match err {
                TokenError::Missing => {
                    ProductDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
                }
                TokenError::Invalid(err) => {
                    warn!(function = "get_product_api", "invalid token: {}", err);
                    ProductDetailResponses::Forbidden(Json(ForbiddenResponse::default()))
                }
            };
        }

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return ProductDetailResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid product ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "get_product_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_product_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "get_product_api",
                        "fetching product by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(val) => ProductDetailResponses::Ok(Json(val.into())),
            None => {
                ProductDetailResponses::NotFound(Json(NotFoundResponse::new("Product not found")))
            }
        }
    }

    #[oai(path = "/products/:id", method = "put", tag = "ApiProductTags::Product")]
    async fn update_product_api(
        &self,
        id: Path<String>,
        json: Json<Value>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductUpdateResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return ProductUpdateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "update_product_api", "invalid token: {}", err);
                return ProductUpdateResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return ProductUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid product ID",
                )))
            }
        };
        let patch = match filter_patch(&json.0, PATCHABLE_FIELDS) {
            Ok(val) => val,
            Err(err) => {
                return ProductUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "update_product_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let current = match get_product_by_id_for_update(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "update_product_api",
                        "fetching product data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let current = match current {
            Some(val) => val,
            None => {
                return ProductUpdateResponses::NotFound(Json(NotFoundResponse::new(
                    "Product not found",
                )))
            }
        };

        let merged = match merge_patch(&current, &patch) {
            Ok(val) => val,
            Err(MergeError::Record(err)) => {
                return ProductUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "update_product_api",
                        "merging product data",
                        &err,
                    ),
                ))
            }
            Err(err) => {
                return ProductUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                    &err.to_string(),
                )))
            }
        };
        let merged_json = match serde_json::to_value(&merged) {
            Ok(val) => val,
            Err(err) => {
                return ProductUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "update_product_api",
                        "merging product data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(message) = validate_product(&merged_json) {
            return ProductUpdateResponses::BadRequest(Json(BadRequestResponse::new(&message)));
        }

        let rows_affected = match update_product(&mut tx, &merged).await {
            Ok(val) => val,
            Err(err) => {
                return ProductUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "update_product_api",
                        "updating product data",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return ProductUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::not_applied(
                    "route.product",
                    "update_product_api",
                    "Product not updated",
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return ProductUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.product",
                    "update_product_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(product_id = id, requested_by = %claims.firstname, "product updated");
        ProductUpdateResponses::Ok(Json(ProductUpdateResponse {
            message: "Product updated successfully".to_string(),
            product: merged.into(),
        }))
    }

    #[oai(path = "/products/:id", method = "delete", tag = "ApiProductTags::Product")]
    async fn delete_product_api(
        &self,
        id: Path<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProductDeleteResponses {
        // Validate user token
        let claims = match get_claims_from_token(auth.0.token, &state.config.jwt_secret) {
            Ok(val) => val,
            Err(TokenError::Missing) => {
                return ProductDeleteResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
            Err(TokenError::Invalid(err)) => {
                warn!(function = "delete_product_api", "invalid token: {}", err);
                return ProductDeleteResponses::Forbidden(Json(ForbiddenResponse::default()));
            }
        };

        let id = match parse_path_id(&id.0) {
            Some(val) => val,
            None => {
                return ProductDeleteResponses::BadRequest(Json(BadRequestResponse::new(
                    "Invalid product ID",
                )))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProductDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "delete_product_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let rows_affected = match delete_product(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return ProductDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.product",
                        "delete_product_api",
                        "deleting product by ID",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if rows_affected == 0 {
            return ProductDeleteResponses::NotFound(Json(NotFoundResponse::new(
                "Product not found",
            )));
        }

        if let Err(err) = tx.commit().await {
            return ProductDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.product",
                    "delete_product_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(product_id = id, requested_by = %claims.firstname, "product deleted");
        ProductDeleteResponses::Ok(Json(MessageResponse::new("Product deleted successfully")))
    }
}
