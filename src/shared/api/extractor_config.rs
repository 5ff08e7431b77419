// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

/// Malformed bodies (including unknown enum labels or icon names) become a
/// 400 `VALIDATION_ERROR` envelope instead of actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_error(&message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_error(&message),
        )
        .into()
    })
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_error(&message),
        )
        .into()
    })
}
