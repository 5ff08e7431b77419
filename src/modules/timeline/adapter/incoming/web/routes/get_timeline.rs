use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::outgoing::timeline_query::{
    default_timeline_order, TimelineSortField,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::resolve_order;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetTimelineQuery {
    pub order_by: Option<TimelineSortField>,
    pub ascending: Option<bool>,
}

/// List timeline entries
#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = "timeline",
    params(GetTimelineQuery),
    responses(
        (status = 200, description = "Timeline entries", body = inline(SuccessResponse<Vec<TimelineEntry>>)),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/timeline")]
pub async fn get_timeline_handler(
    query: web::Query<GetTimelineQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let order = resolve_order(default_timeline_order(), query.order_by, query.ascending);

    match data.timeline.get_list.execute(order).await {
        Ok(entries) => ApiResponse::success(entries),
        Err(e) => {
            error!("Failed to list timeline: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::timeline::application::ports::incoming::use_cases::{
        GetTimelineError, GetTimelineUseCase,
    };
    use crate::modules::timeline::application::ports::outgoing::timeline_query::TimelineOrder;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::timeline_test_fixtures::sample_timeline;

    struct MockGetTimelineUseCase {
        result: Result<Vec<TimelineEntry>, GetTimelineError>,
    }

    #[async_trait]
    impl GetTimelineUseCase for MockGetTimelineUseCase {
        async fn execute(&self, _order: TimelineOrder) -> Result<Vec<TimelineEntry>, GetTimelineError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_timeline_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_timeline(MockGetTimelineUseCase {
                result: Ok(sample_timeline()),
            })
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(get_timeline_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/timeline").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["type"], "work");
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_get_timeline_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_get_timeline(MockGetTimelineUseCase {
                result: Err(GetTimelineError::QueryFailed("db down".to_string())),
            })
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(get_timeline_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/timeline").to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
