use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{payload::Json, OpenApi, Tags};
use tracing::info;

use crate::{
    core::{security::generate_token, utils::timestamp_to_string},
    schema::{
        auth::{LoginRequest, LoginResponse, LoginResponses},
        common::{BadRequestResponse, InternalServerErrorResponse},
    },
    AppState,
};

#[derive(Tags)]
enum ApiAuthTags {
    Auth,
}

pub struct ApiAuth;

#[OpenApi]
impl ApiAuth {
    /// Issue a bearer token. Credentials are not checked against storage.
    #[oai(path = "/login", method = "post", tag = "ApiAuthTags::Auth")]
    async fn auth_login(
        &self,
        json: Json<LoginRequest>,
        state: Data<&Arc<AppState>>,
    ) -> LoginResponses {
        let firstname = match json.firstname.as_deref().map(str::trim) {
            Some(val) if !val.is_empty() => val,
            _ => {
                return LoginResponses::BadRequest(Json(BadRequestResponse::new(
                    "firstname is required",
                )))
            }
        };

        // Generate token
        let (token, claims) = match generate_token(firstname, &state.config) {
            Ok(val) => val,
            Err(err) => {
                return LoginResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.auth",
                        "auth_login",
                        "generating token",
                        &err.to_string(),
                    ),
                ))
            }
        };

        info!(firstname = %claims.firstname, "token issued");
        LoginResponses::Ok(Json(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            exp: timestamp_to_string(claims.exp).unwrap_or_default(),
        }))
    }
}
