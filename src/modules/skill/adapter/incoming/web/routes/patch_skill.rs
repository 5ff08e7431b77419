use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::{Skill, SkillLevel};
use crate::modules::skill::application::ports::incoming::use_cases::PatchSkillError;
use crate::modules::skill::application::ports::outgoing::skill_repository::PatchSkillData;
use crate::shared::api::ApiResponse;
use crate::shared::content::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchSkillRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<SkillLevel>)]
    pub level: PatchField<SkillLevel>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub color: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub order_index: PatchField<i32>,
}

impl From<PatchSkillRequest> for PatchSkillData {
    fn from(req: PatchSkillRequest) -> Self {
        PatchSkillData {
            name: req.name,
            level: req.level,
            technologies: req.technologies,
            color: req.color,
            order_index: req.order_index,
        }
    }
}

/// Patch a skill
#[utoipa::path(
    patch,
    path = "/api/skills/{skill_id}",
    tag = "skills",
    params(("skill_id" = Uuid, Path, description = "Skill id")),
    request_body = PatchSkillRequest,
    responses(
        (status = 200, description = "Updated skill", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 404, description = "No skill with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/skills/{skill_id}")]
pub async fn patch_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.patch.execute(skill_id, req.into_inner().into()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchSkillError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(PatchSkillError::NotFound) => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        Err(PatchSkillError::RepositoryError(e)) => {
            error!("Repository error patching skill {}: {}", skill_id, e);
            ApiResponse::internal_error()
        }
    }
}
