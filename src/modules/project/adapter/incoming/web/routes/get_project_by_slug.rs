use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectBySlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by slug
#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug, case-insensitive")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_by_slug.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectBySlugError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectBySlugError::RepositoryError(e)) => {
            error!("Repository error fetching project {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
