use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::modules::interest::application::ports::outgoing::interest_query::{
    default_interest_order, InterestListFilter, InterestOrder, InterestSortField,
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
pub struct GetInterestsQuery {
    pub category: Option<InterestCategory>,
    pub interest_type: Option<InterestType>,
    pub featured: Option<bool>,
    pub order_by: Option<InterestSortField>,
    pub ascending: Option<bool>,
}

impl From<GetInterestsQuery> for (InterestListFilter, InterestOrder) {
    fn from(q: GetInterestsQuery) -> Self {
        let filter = InterestListFilter {
            category: q.category,
            featured: q.featured,
            interest_type: q.interest_type,
        };
        let order = resolve_order(default_interest_order(), q.order_by, q.ascending);

        (filter, order)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List interests
#[utoipa::path(
    get,
    path = "/api/interests",
    tag = "interests",
    params(GetInterestsQuery),
    responses(
        (status = 200, description = "Interests", body = inline(SuccessResponse<Vec<Interest>>)),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/interests")]
pub async fn get_interests_handler(
    query: web::Query<GetInterestsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, order) = query.into_inner().into();

    match data.interest.get_list.execute(filter, order).await {
        Ok(interests) => ApiResponse::success(interests),
        Err(e) => {
            error!("Failed to list interests: {}", e);
            ApiResponse::internal_error()
        }
    }
}
