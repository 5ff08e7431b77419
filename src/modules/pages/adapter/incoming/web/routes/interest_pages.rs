use actix_web::{get, web, Responder};

use super::page_support::{page_error, render_page, ListingQuery};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::interest::application::domain::entities::InterestCategory;
use crate::modules::pages::application::page_props::{
    InterestDetailPage, InterestsPage, PageResponse,
};
use crate::modules::pages::application::render_context::RenderContext;
use crate::AppState;

/// Interests page
///
/// The first featured interest is the spotlight; the grid holds the rest.
#[utoipa::path(
    get,
    path = "/interests",
    tag = "pages",
    params(ListingQuery),
    responses(
        (status = 200, description = "Filtered interests", body = inline(SuccessResponse<PageResponse<InterestsPage>>)),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 500, description = "Interests unavailable", body = ErrorResponse)
    )
)]
#[get("/interests")]
pub async fn interests_page_handler(
    render: RenderContext,
    query: web::Query<ListingQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match query.category::<InterestCategory>() {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match data.pages.interests(category, query.search()).await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/interests", e),
    }
}

/// Interest detail page
#[utoipa::path(
    get,
    path = "/interests/{slug}",
    tag = "pages",
    params(("slug" = String, Path, description = "Interest slug")),
    responses(
        (status = 200, description = "Interest", body = inline(SuccessResponse<PageResponse<InterestDetailPage>>)),
        (status = 404, description = "No interest with this slug", body = ErrorResponse),
        (status = 500, description = "Interests unavailable", body = ErrorResponse)
    )
)]
#[get("/interests/{slug}")]
pub async fn interest_detail_page_handler(
    render: RenderContext,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.pages.interest(&path.into_inner()).await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/interests/{slug}", e),
    }
}
