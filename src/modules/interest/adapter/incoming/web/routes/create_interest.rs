use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::modules::interest::application::ports::incoming::use_cases::CreateInterestError;
use crate::modules::interest::application::ports::outgoing::interest_repository::CreateInterestData;
use crate::shared::api::ApiResponse;
use crate::shared::content::Icon;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInterestRequest {
    #[schema(example = "game-design")]
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub category: InterestCategory,
    #[serde(rename = "type")]
    pub interest_type: InterestType,
    /// Must be one of the known icon names
    pub icon: Icon,
    #[schema(example = "purple")]
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl From<CreateInterestRequest> for CreateInterestData {
    fn from(req: CreateInterestRequest) -> Self {
        CreateInterestData {
            slug: req.slug,
            title: req.title,
            excerpt: req.excerpt,
            content: req.content,
            category: req.category,
            interest_type: req.interest_type,
            icon: req.icon,
            color: req.color,
            tags: req.tags,
            featured: req.featured,
        }
    }
}

/// Create an interest
#[utoipa::path(
    post,
    path = "/api/interests",
    tag = "interests",
    request_body = CreateInterestRequest,
    responses(
        (status = 201, description = "Interest created", body = inline(SuccessResponse<Interest>)),
        (status = 400, description = "Invalid interest", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/interests")]
pub async fn create_interest_handler(
    _admin: AdminUser,
    req: web::Json<CreateInterestRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.interest.create.execute(req.into_inner().into()).await {
        Ok(interest) => ApiResponse::created(interest),
        Err(CreateInterestError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreateInterestError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Slug already exists")
        }
        Err(CreateInterestError::RepositoryError(e)) => {
            error!("Repository error creating interest: {}", e);
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

    use crate::modules::interest::application::ports::incoming::use_cases::CreateInterestUseCase;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::interest_test_fixtures::sample_interest;

    #[derive(Clone)]
    struct MockCreateInterestUseCase {
        result: Result<Interest, CreateInterestError>,
    }

    #[async_trait]
    impl CreateInterestUseCase for MockCreateInterestUseCase {
        async fn execute(&self, data: CreateInterestData) -> Result<Interest, CreateInterestError> {
            let mut interest = self.result.clone()?;
            interest.icon = data.icon;
            Ok(interest)
        }
    }

    fn body(icon: &str) -> Value {
        json!({
            "slug": "game-design",
            "title": "Game Design",
            "excerpt": "Systems that make play feel right",
            "category": "Technical",
            "type": "Creative Technology",
            "icon": icon,
            "color": "purple",
            "featured": true
        })
    }

    async fn post(result: Result<Interest, CreateInterestError>, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_interest(MockCreateInterestUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_interest_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/interests")
            .insert_header(bearer())
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_create_interest_success() {
        let (status, body) = post(
            Ok(sample_interest("game-design", "Game Design", true)),
            body("Gamepad2"),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["icon"], "Gamepad2");
    }

    #[actix_web::test]
    async fn test_create_interest_unknown_icon_is_400() {
        let (status, body) = post(
            Ok(sample_interest("game-design", "Game Design", true)),
            body("Rocket"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_create_interest_conflict() {
        let (status, body) = post(Err(CreateInterestError::SlugAlreadyExists), body("Film")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SLUG_ALREADY_EXISTS");
    }
}
