use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an interest
#[utoipa::path(
    delete,
    path = "/api/interests/{interest_id}",
    tag = "interests",
    params(("interest_id" = Uuid, Path, description = "Interest id")),
    responses(
        (status = 204, description = "Interest deleted"),
        (status = 404, description = "No interest with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/interests/{interest_id}")]
pub async fn delete_interest_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let interest_id = path.into_inner();

    match data.interest.delete.execute(interest_id).await {
        Ok(true) => {
            info!("Interest {} deleted by {}", interest_id, admin.subject);
            ApiResponse::no_content()
        }
        Ok(false) => ApiResponse::not_found("INTEREST_NOT_FOUND", "Interest not found"),
        Err(e) => {
            error!("Repository error deleting interest {}: {}", interest_id, e);
            ApiResponse::internal_error()
        }
    }
}
