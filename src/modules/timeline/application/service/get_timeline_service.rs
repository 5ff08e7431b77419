use async_trait::async_trait;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::incoming::use_cases::{
    GetTimelineError, GetTimelineUseCase,
};
use crate::modules::timeline::application::ports::outgoing::timeline_query::{
    TimelineOrder, TimelineQuery,
};

pub struct GetTimelineService<Q>
where
    Q: TimelineQuery,
{
    query: Q,
}

impl<Q> GetTimelineService<Q>
where
    Q: TimelineQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTimelineUseCase for GetTimelineService<Q>
where
    Q: TimelineQuery + Send + Sync,
{
    async fn execute(&self, order: TimelineOrder) -> Result<Vec<TimelineEntry>, GetTimelineError> {
        self.query
            .list(order)
            .await
            .map_err(|e| GetTimelineError::QueryFailed(e.to_string()))
    }
}
