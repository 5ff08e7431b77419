use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::incoming::use_cases::GetInterestBySlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get an interest by slug
#[utoipa::path(
    get,
    path = "/api/interests/{slug}",
    tag = "interests",
    params(("slug" = String, Path, description = "Interest slug")),
    responses(
        (status = 200, description = "Interest", body = inline(SuccessResponse<Interest>)),
        (status = 404, description = "No interest with this slug", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/interests/{slug}")]
pub async fn get_interest_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.interest.get_by_slug.execute(&slug).await {
        Ok(interest) => ApiResponse::success(interest),
        Err(GetInterestBySlugError::NotFound) => {
            ApiResponse::not_found("INTEREST_NOT_FOUND", "Interest not found")
        }
        Err(GetInterestBySlugError::RepositoryError(e)) => {
            error!("Repository error fetching interest {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
