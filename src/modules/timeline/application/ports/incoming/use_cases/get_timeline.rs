use async_trait::async_trait;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::outgoing::timeline_query::TimelineOrder;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTimelineError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTimelineUseCase: Send + Sync {
    async fn execute(&self, order: TimelineOrder) -> Result<Vec<TimelineEntry>, GetTimelineError>;
}
