use actix_web::{get, web, Responder};

use super::page_support::render_page;
use crate::api::schemas::SuccessResponse;
use crate::modules::pages::application::page_props::{AboutPage, PageResponse};
use crate::modules::pages::application::render_context::RenderContext;
use crate::AppState;

/// About page
///
/// Skills and timeline. A source that fails renders empty and is listed in
/// `degraded_sections`.
#[utoipa::path(
    get,
    path = "/about",
    tag = "pages",
    responses(
        (status = 200, description = "About page props", body = inline(SuccessResponse<PageResponse<AboutPage>>))
    )
)]
#[get("/about")]
pub async fn about_page_handler(render: RenderContext, data: web::Data<AppState>) -> impl Responder {
    render_page(render, data.pages.about().await)
}
