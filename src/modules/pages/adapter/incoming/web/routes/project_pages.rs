use actix_web::{get, web, Responder};

use super::page_support::{page_error, render_page, ListingQuery};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::pages::application::page_props::{
    PageResponse, ProjectDetailPage, ProjectsPage,
};
use crate::modules::pages::application::render_context::RenderContext;
use crate::modules::project::application::domain::entities::ProjectCategory;
use crate::AppState;

/// Projects page
#[utoipa::path(
    get,
    path = "/projects",
    tag = "pages",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered projects", body = inline(SuccessResponse<PageResponse<ProjectsPage>>)),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 500, description = "Projects unavailable", body = ErrorResponse)
    )
)]
#[get("/projects")]
pub async fn projects_page_handler(
    render: RenderContext,
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match query.category::<ProjectCategory>() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match data.pages.projects(category, query.search()).await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/projects", e),
    }
}

/// Project detail page
#[utoipa::path(
    get,
    path = "/projects/{slug}",
    tag = "pages",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<PageResponse<ProjectDetailPage>>)),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
        (status = 500, description = "Projects unavailable", body = ErrorResponse)
    )
)]
#[get("/projects/{slug}")]
pub async fn project_detail_page_handler(
    render: RenderContext,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pages.project(&path.into_inner()).await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/projects/{slug}", e),
    }
}
