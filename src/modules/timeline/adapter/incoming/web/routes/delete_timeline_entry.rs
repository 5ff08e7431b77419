use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a timeline entry
#[utoipa::path(
    delete,
    path = "/api/timeline/{entry_id}",
    tag = "timeline",
    params(("entry_id" = Uuid, Path, description = "Timeline entry id")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "No entry with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/timeline/{entry_id}")]
pub async fn delete_timeline_entry_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.timeline.delete.execute(entry_id).await {
        Ok(true) => {
            info!("Timeline entry {} deleted by {}", entry_id, admin.subject);
            ApiResponse::no_content()
        }
        Ok(false) => ApiResponse::not_found("TIMELINE_ENTRY_NOT_FOUND", "Timeline entry not found"),
        Err(e) => {
            error!("Repository error deleting timeline entry {}: {}", entry_id, e);
            ApiResponse::internal_error()
        }
    }
}
