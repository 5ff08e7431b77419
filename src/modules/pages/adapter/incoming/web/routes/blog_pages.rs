use actix_web::{get, web, Responder};

use super::page_support::{page_error, render_page, ListingQuery};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::domain::entities::BlogCategory;
use crate::modules::pages::application::page_props::{BlogPage, BlogTopicsPage, PageResponse};
use crate::modules::pages::application::render_context::RenderContext;
use crate::AppState;

/// Blog page
///
/// The featured post is only promoted while no filter is active.
#[utoipa::path(
    get,
    path = "/blog",
    tag = "pages",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered posts", body = inline(SuccessResponse<PageResponse<BlogPage>>)),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
#[get("/blog")]
pub async fn blog_page_handler(
    render: RenderContext,
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match query.category::<BlogCategory>() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match data.pages.blog(category, query.search()).await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/blog", e),
    }
}

/// Blog topics page
#[utoipa::path(
    get,
    path = "/blog/topics",
    tag = "pages",
    responses(
        (status = 200, description = "Topics", body = inline(SuccessResponse<PageResponse<BlogTopicsPage>>)),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
#[get("/blog/topics")]
pub async fn blog_topics_page_handler(
    render: RenderContext,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pages.blog_topics().await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/blog/topics", e),
    }
}
