use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::timeline::application::domain::entities::{TimelineEntry, TimelineEntryType};
use crate::modules::timeline::application::ports::incoming::use_cases::PatchTimelineEntryError;
use crate::modules::timeline::application::ports::outgoing::timeline_repository::PatchTimelineEntryData;
use crate::shared::api::ApiResponse;
use crate::shared::content::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchTimelineEntryRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub year: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default, rename = "type")]
    #[schema(value_type = Option<TimelineEntryType>)]
    pub entry_type: PatchField<TimelineEntryType>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub achievements: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub order_index: PatchField<i32>,
}

impl From<PatchTimelineEntryRequest> for PatchTimelineEntryData {
    fn from(req: PatchTimelineEntryRequest) -> Self {
        PatchTimelineEntryData {
            year: req.year,
            title: req.title,
            entry_type: req.entry_type,
            description: req.description,
            location: req.location,
            technologies: req.technologies,
            achievements: req.achievements,
            status: req.status,
            order_index: req.order_index,
        }
    }
}

/// Patch a timeline entry
#[utoipa::path(
    patch,
    path = "/api/timeline/{entry_id}",
    tag = "timeline",
    params(("entry_id" = Uuid, Path, description = "Timeline entry id")),
    request_body = PatchTimelineEntryRequest,
    responses(
        (status = 200, description = "Updated entry", body = inline(SuccessResponse<TimelineEntry>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 404, description = "No entry with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/timeline/{entry_id}")]
pub async fn patch_timeline_entry_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchTimelineEntryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data
        .timeline
        .patch
        .execute(entry_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchTimelineEntryError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(PatchTimelineEntryError::NotFound) => {
            ApiResponse::not_found("TIMELINE_ENTRY_NOT_FOUND", "Timeline entry not found")
        }
        Err(PatchTimelineEntryError::RepositoryError(e)) => {
            error!("Repository error patching timeline entry {}: {}", entry_id, e);
            ApiResponse::internal_error()
        }
    }
}
