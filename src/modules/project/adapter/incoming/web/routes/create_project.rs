use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{
    Project, ProjectCategory, ProjectStatus, TechStack,
};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "chip8-emulator")]
    pub slug: String,
    #[schema(example = "CHIP-8 Emulator")]
    pub title: String,
    pub category: ProjectCategory,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub image: Option<String>,
    pub status: ProjectStatus,
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub project_date: NaiveDate,
    pub duration: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub tech_stack: TechStack,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl From<CreateProjectRequest> for CreateProjectData {
    fn from(req: CreateProjectRequest) -> Self {
        CreateProjectData {
            slug: req.slug,
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

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid project", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    admin: AdminUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let create_data: CreateProjectData = req.into_inner().into();

    match data.project.create.execute(create_data).await {
        Ok(project) => {
            info!("Project {} created by {}", project.slug, admin.subject);
            ApiResponse::created(project)
        }

        Err(CreateProjectError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Slug already exists")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
