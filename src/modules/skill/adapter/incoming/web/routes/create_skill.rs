use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::{Skill, SkillLevel};
use crate::modules::skill::application::ports::incoming::use_cases::CreateSkillError;
use crate::modules::skill::application::ports::outgoing::skill_repository::CreateSkillData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSkillRequest {
    #[schema(example = "Rust")]
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub color: String,
    #[serde(default)]
    pub order_index: i32,
}

impl From<CreateSkillRequest> for CreateSkillData {
    fn from(req: CreateSkillRequest) -> Self {
        CreateSkillData {
            name: req.name,
            level: req.level,
            technologies: req.technologies,
            color: req.color,
            order_index: req.order_index,
        }
    }
}

/// Create a skill
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    request_body = CreateSkillRequest,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Invalid skill", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.create.execute(req.into_inner().into()).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(CreateSkillError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
