use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::project::application::ports::outgoing::project_query::{
    default_project_order, ProjectListFilter, ProjectOrder, ProjectSortField,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::resolve_order;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetProjectsQuery {
    /// Category label, e.g. `Game Development`
    pub category: Option<ProjectCategory>,
    pub order_by: Option<ProjectSortField>,
    pub ascending: Option<bool>,
    pub limit: Option<u64>,
}

impl From<GetProjectsQuery> for (ProjectListFilter, ProjectOrder) {
    fn from(q: GetProjectsQuery) -> Self {
        let filter = ProjectListFilter {
            category: q.category,
            limit: q.limit,
        };
        let order = resolve_order(default_project_order(), q.order_by, q.ascending);

        (filter, order)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Newest first unless `order_by`/`ascending` say otherwise.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, order) = query.into_inner().into();

    match data.project.get_list.execute(filter, order).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
