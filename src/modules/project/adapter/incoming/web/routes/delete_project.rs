use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No project with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/projects/{project_id}")]
pub async fn delete_project_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(true) => {
            info!("Project {} deleted by {}", project_id, admin.subject);
            ApiResponse::no_content()
        }
        Ok(false) => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
        Err(e) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
