use actix_web::{get, web, Responder};

use super::page_support::{page_error, render_page};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::pages::application::page_props::{HomePage, PageResponse};
use crate::modules::pages::application::render_context::RenderContext;
use crate::AppState;

/// Home page
///
/// The three most recent projects and every featured interest.
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Home page props", body = inline(SuccessResponse<PageResponse<HomePage>>)),
        (status = 500, description = "Projects or interests unavailable", body = ErrorResponse)
    )
)]
#[get("/")]
pub async fn home_page_handler(render: RenderContext, data: web::Data<AppState>) -> impl Responder {
    match data.pages.home().await {
        Ok(props) => render_page(render, props),
        Err(e) => page_error("/", e),
    }
}
