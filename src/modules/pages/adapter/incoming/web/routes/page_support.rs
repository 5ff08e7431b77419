use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::pages::application::page_composer::PageError;
use crate::modules::pages::application::page_props::PageResponse;
use crate::modules::pages::application::render_context::RenderContext;
use crate::shared::api::ApiResponse;
use crate::shared::content::UnknownLabel;
use crate::shared::filter_view::CategoryFilter;

/// Filter state of a listing page.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListingQuery {
    /// Category label, or `All`
    pub category: Option<String>,
    /// Free-text search over title, summary and tags
    pub q: Option<String>,
}

impl ListingQuery {
    pub(super) fn category<C>(&self) -> Result<CategoryFilter<C>, HttpResponse>
    where
        C: FromStr<Err = UnknownLabel>,
    {
        CategoryFilter::<C>::parse(self.category.as_deref())
            .map_err(|e: UnknownLabel| ApiResponse::validation_error(&e.to_string()))
    }

    pub(super) fn search(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

pub(super) fn render_page<P: Serialize>(render: RenderContext, props: P) -> HttpResponse {
    ApiResponse::success(PageResponse { render, props })
}

pub(super) fn page_error(page: &str, err: PageError) -> HttpResponse {
    match err {
        PageError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        PageError::InterestNotFound => {
            ApiResponse::not_found("INTEREST_NOT_FOUND", "Interest not found")
        }
        PageError::SectionFailed { section, reason } => {
            error!("Page {} failed on section {}: {}", page, section, reason);
            ApiResponse::internal_error()
        }
    }
}
