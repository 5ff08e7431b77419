use actix_web::{patch, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{
    Project, ProjectCategory, ProjectStatus, TechStack,
};
use crate::modules::project::application::ports::incoming::use_cases::PatchProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::PatchProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::content::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields are left unchanged, `null` clears an optional field.
/// `slug`, `id` and timestamps are not patchable and are ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PatchProjectRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<ProjectCategory>)]
    pub category: PatchField<ProjectCategory>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub long_description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<ProjectStatus>)]
    pub status: PatchField<ProjectStatus>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub project_date: PatchField<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub duration: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub team: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub role: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub features: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub challenges: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub solutions: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub screenshots: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<TechStack>)]
    pub tech_stack: PatchField<TechStack>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,
}

impl From<PatchProjectRequest> for PatchProjectData {
    fn from(req: PatchProjectRequest) -> Self {
        PatchProjectData {
            title: req.title,
            category: req.category,
            description: req.description,
            long_description: req.long_description,
            image: req.image,
            status: req.status,
            project_date: req.project_date,
            duration: req.duration,
            team: req.team,
            role: req.role,
            tags: req.tags,
            features: req.features,
            challenges: req.challenges,
            solutions: req.solutions,
            screenshots: req.screenshots,
            tech_stack: req.tech_stack,
            github_url: req.github_url,
            live_url: req.live_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Patch a project
#[utoipa::path(
    patch,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = PatchProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No project with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/projects/{project_id}")]
pub async fn patch_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let patch_data: PatchProjectData = req.into_inner().into();

    match data.project.patch.execute(project_id, patch_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchProjectError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),

        Err(PatchProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(PatchProjectError::RepositoryError(e)) => {
            error!("Repository error patching project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
