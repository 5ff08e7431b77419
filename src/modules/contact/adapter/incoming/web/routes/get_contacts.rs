use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::outgoing::contact_query::{
    default_contact_order, ContactListFilter,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetContactsQuery {
    pub contact_type: Option<ContactType>,
}

/// List active contact methods
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    params(GetContactsQuery),
    responses(
        (status = 200, description = "Active contact methods in display order", body = inline(SuccessResponse<Vec<ContactInfo>>)),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/contact")]
pub async fn get_contacts_handler(
    query: web::Query<GetContactsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ContactListFilter {
        contact_type: query.into_inner().contact_type,
    };

    match data.contact.get_list.execute(filter, default_contact_order()).await {
        Ok(contacts) => ApiResponse::success(contacts),
        Err(e) => {
            error!("Failed to list contact info: {}", e);
            ApiResponse::internal_error()
        }
    }
}
