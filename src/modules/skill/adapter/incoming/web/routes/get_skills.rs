use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_query::{
    default_skill_order, SkillSortField,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::resolve_order;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetSkillsQuery {
    pub order_by: Option<SkillSortField>,
    pub ascending: Option<bool>,
}

/// List skills
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(GetSkillsQuery),
    responses(
        (status = 200, description = "Skills in display order", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<GetSkillsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let order = resolve_order(default_skill_order(), query.order_by, query.ascending);

    match data.skill.get_list.execute(order).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
