use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a skill
#[utoipa::path(
    delete,
    path = "/api/skills/{skill_id}",
    tag = "skills",
    params(("skill_id" = Uuid, Path, description = "Skill id")),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 404, description = "No skill with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/skills/{skill_id}")]
pub async fn delete_skill_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.delete.execute(skill_id).await {
        Ok(true) => {
            info!("Skill {} deleted by {}", skill_id, admin.subject);
            ApiResponse::no_content()
        }
        Ok(false) => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        Err(e) => {
            error!("Repository error deleting skill {}: {}", skill_id, e);
            ApiResponse::internal_error()
        }
    }
}
