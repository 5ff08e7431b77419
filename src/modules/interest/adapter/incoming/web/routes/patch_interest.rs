use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::modules::interest::application::ports::incoming::use_cases::PatchInterestError;
use crate::modules::interest::application::ports::outgoing::interest_repository::PatchInterestData;
use crate::shared::api::ApiResponse;
use crate::shared::content::{Icon, PatchField};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchInterestRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub excerpt: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<InterestCategory>)]
    pub category: PatchField<InterestCategory>,

    #[serde(default, rename = "type")]
    #[schema(value_type = Option<InterestType>)]
    pub interest_type: PatchField<InterestType>,

    #[serde(default)]
    #[schema(value_type = Option<Icon>)]
    pub icon: PatchField<Icon>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub color: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub featured: PatchField<bool>,
}

impl From<PatchInterestRequest> for PatchInterestData {
    fn from(req: PatchInterestRequest) -> Self {
        PatchInterestData {
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

/// Patch an interest
#[utoipa::path(
    patch,
    path = "/api/interests/{interest_id}",
    tag = "interests",
    params(("interest_id" = Uuid, Path, description = "Interest id")),
    request_body = PatchInterestRequest,
    responses(
        (status = 200, description = "Updated interest", body = inline(SuccessResponse<Interest>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 404, description = "No interest with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/interests/{interest_id}")]
pub async fn patch_interest_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchInterestRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let interest_id = path.into_inner();

    match data
        .interest
        .patch
        .execute(interest_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(PatchInterestError::Validation(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(PatchInterestError::NotFound) => {
            ApiResponse::not_found("INTEREST_NOT_FOUND", "Interest not found")
        }
        Err(PatchInterestError::RepositoryError(e)) => {
            error!("Repository error patching interest {}: {}", interest_id, e);
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

    use crate::modules::interest::application::ports::incoming::use_cases::PatchInterestUseCase;
    use crate::shared::content::ValidationError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::interest_test_fixtures::sample_interest;

    #[derive(Clone)]
    struct MockPatchInterestUseCase {
        result: Result<Interest, PatchInterestError>,
    }

    #[async_trait]
    impl PatchInterestUseCase for MockPatchInterestUseCase {
        async fn execute(
            &self,
            _interest_id: Uuid,
            _data: PatchInterestData,
        ) -> Result<Interest, PatchInterestError> {
            self.result.clone()
        }
    }

    async fn send(result: Result<Interest, PatchInterestError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_patch_interest(MockPatchInterestUseCase { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(patch_interest_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/interests/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .set_json(json!({ "featured": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_patch_interest_success() {
        let (status, body) = send(Ok(sample_interest("game-design", "Game Design", false))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["featured"], false);
    }

    #[actix_web::test]
    async fn test_patch_interest_validation_error() {
        let (status, body) = send(Err(PatchInterestError::Validation(ValidationError::new(
            "icon",
            "cannot be null",
        ))))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "icon: cannot be null");
    }

    #[actix_web::test]
    async fn test_patch_interest_not_found() {
        let (status, body) = send(Err(PatchInterestError::NotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "INTEREST_NOT_FOUND");
    }
}
