use actix_web::{get, web, Responder};

use super::page_support::render_page;
use crate::api::schemas::SuccessResponse;
use crate::modules::pages::application::page_props::{ContactPage, PageResponse};
use crate::modules::pages::application::render_context::RenderContext;
use crate::AppState;

/// Contact page
#[utoipa::path(
    get,
    path = "/contact",
    tag = "pages",
    responses(
        (status = 200, description = "Contact page props", body = inline(SuccessResponse<PageResponse<ContactPage>>))
    )
)]
#[get("/contact")]
pub async fn contact_page_handler(
    render: RenderContext,
    data: web::Data<AppState>,
) -> impl Responder {
    render_page(render, data.pages.contact().await)
}
