use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::incoming::use_cases::CreateContactError;
use crate::modules::contact::application::ports::outgoing::contact_repository::CreateContactData;
use crate::shared::api::ApiResponse;
use crate::shared::content::Icon;
use crate::AppState;

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    #[schema(example = "Email")]
    pub label: String,
    #[schema(example = "hello@example.com")]
    pub value: String,
    pub url: Option<String>,
    pub icon: Option<Icon>,
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<CreateContactRequest> for CreateContactData {
    fn from(req: CreateContactRequest) -> Self {
        CreateContactData {
            contact_type: req.contact_type,
            label: req.label,
            value: req.value,
            url: req.url,
            icon: req.icon,
            description: req.description,
            display_order: req.display_order,
            is_active: req.is_active,
        }
    }
}

/// Create a contact method
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact method created", body = inline(SuccessResponse<ContactInfo>)),
        (status = 400, description = "Invalid contact method", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/contact")]
pub async fn create_contact_handler(
    _admin: AdminUser,
    req: web::Json<CreateContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.create.execute(req.into_inner().into()).await {
        Ok(contact) => ApiResponse::created(contact),
        Err(CreateContactError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreateContactError::RepositoryError(e)) => {
            error!("Repository error creating contact info: {}", e);
            ApiResponse::internal_error()
        }
    }
}
