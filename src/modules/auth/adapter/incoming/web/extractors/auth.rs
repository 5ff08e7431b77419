use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

/// A request carrying a valid admin token.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => {
                if !claims.is_admin() {
                    tracing::warn!("Rejected write by non-admin subject {}", claims.sub);
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "ADMIN_REQUIRED",
                        "Admin role required",
                    ))));
                }

                ready(Ok(AdminUser {
                    subject: claims.sub,
                }))
            }
            Err(TokenError::TokenExpired) => ready(Err(create_api_error(
                ApiResponse::unauthorized("TOKEN_EXPIRED", "Token has expired"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
