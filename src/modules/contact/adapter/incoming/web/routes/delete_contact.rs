use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a contact method
#[utoipa::path(
    delete,
    path = "/api/contact/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact info id")),
    responses(
        (status = 204, description = "Contact method deleted"),
        (status = 404, description = "No contact method with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/contact/{contact_id}")]
pub async fn delete_contact_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data.contact.delete.execute(contact_id).await {
        Ok(true) => {
            info!("Contact info {} deleted by {}", contact_id, admin.subject);
            ApiResponse::no_content()
        }
        Ok(false) => ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact info not found"),
        Err(e) => {
            error!("Repository error deleting contact info {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
