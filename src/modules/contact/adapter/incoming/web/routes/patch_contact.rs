use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::incoming::use_cases::PatchContactError;
use crate::modules::contact::application::ports::outgoing::contact_repository::PatchContactData;
use crate::shared::api::ApiResponse;
use crate::shared::content::{Icon, PatchField};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchContactRequest {
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<ContactType>)]
    pub contact_type: PatchField<ContactType>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub label: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub value: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub url: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Icon>)]
    pub icon: PatchField<Icon>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub display_order: PatchField<i32>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_active: PatchField<bool>,
}

impl From<PatchContactRequest> for PatchContactData {
    fn from(req: PatchContactRequest) -> Self {
        PatchContactData {
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

/// Patch a contact method
#[utoipa::path(
    patch,
    path = "/api/contact/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "Contact info id")),
    request_body = PatchContactRequest,
    responses(
        (status = 200, description = "Updated contact method", body = inline(SuccessResponse<ContactInfo>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 404, description = "No contact method with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/contact/{contact_id}")]
pub async fn patch_contact_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data
        .contact
        .patch
        .execute(contact_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchContactError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(PatchContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact info not found")
        }
        Err(PatchContactError::RepositoryError(e)) => {
            error!("Repository error patching contact info {}: {}", contact_id, e);
            ApiResponse::internal_error()
        }
    }
}
