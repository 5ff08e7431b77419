// src/api/schemas.rs
//
// Documentation-only mirrors of `shared::api::ApiResponse`, which cannot
// derive `ToSchema` because its payload is optional on both arms.
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for every 200/201 body
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for every 4xx/5xx body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `PROJECT_NOT_FOUND` or `VALIDATION_ERROR`
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "No project with slug 'atlas'")]
    pub message: String,
}
