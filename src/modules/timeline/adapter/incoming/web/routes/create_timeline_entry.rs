use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::timeline::application::domain::entities::{TimelineEntry, TimelineEntryType};
use crate::modules::timeline::application::ports::incoming::use_cases::CreateTimelineEntryError;
use crate::modules::timeline::application::ports::outgoing::timeline_repository::CreateTimelineEntryData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTimelineEntryRequest {
    #[schema(example = "2021-2023")]
    pub year: String,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: TimelineEntryType,
    pub description: String,
    pub location: String,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub status: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

impl From<CreateTimelineEntryRequest> for CreateTimelineEntryData {
    fn from(req: CreateTimelineEntryRequest) -> Self {
        CreateTimelineEntryData {
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

/// Create a timeline entry
#[utoipa::path(
    post,
    path = "/api/timeline",
    tag = "timeline",
    request_body = CreateTimelineEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<TimelineEntry>)),
        (status = 400, description = "Invalid entry", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/timeline")]
pub async fn create_timeline_entry_handler(
    _admin: AdminUser,
    req: web::Json<CreateTimelineEntryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timeline.create.execute(req.into_inner().into()).await {
        Ok(entry) => ApiResponse::created(entry),
        Err(CreateTimelineEntryError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreateTimelineEntryError::RepositoryError(e)) => {
            error!("Repository error creating timeline entry: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::timeline::application::ports::incoming::use_cases::CreateTimelineEntryUseCase;
    use crate::shared::api::custom_json_config;
    use crate::shared::content::ValidationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::timeline_test_fixtures::sample_entry;

    struct MockCreateTimelineEntryUseCase;

    #[async_trait]
    impl CreateTimelineEntryUseCase for MockCreateTimelineEntryUseCase {
        async fn execute(
            &self,
            data: CreateTimelineEntryData,
        ) -> Result<TimelineEntry, CreateTimelineEntryError> {
            if data.title.trim().is_empty() {
                return Err(ValidationError::new("title", "cannot be empty").into());
            }
            Ok(sample_entry(&data.title, data.entry_type, data.order_index))
        }
    }

    async fn post(body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_timeline_entry(MockCreateTimelineEntryUseCase)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_timeline_entry_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/timeline")
            .insert_header(bearer())
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn body(title: &str, entry_type: &str) -> Value {
        json!({
            "year": "2021-2023",
            "title": title,
            "type": entry_type,
            "description": "Led the platform team",
            "location": "Remote"
        })
    }

    #[actix_web::test]
    async fn test_create_timeline_entry_success() {
        let (status, body) = post(body("Lead Engineer", "leadership")).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["type"], "leadership");
    }

    #[actix_web::test]
    async fn test_create_timeline_entry_validation() {
        let (status, body) = post(body(" ", "work")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_timeline_entry_capitalized_type_is_400() {
        let (status, _) = post(body("Lead Engineer", "Work")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
