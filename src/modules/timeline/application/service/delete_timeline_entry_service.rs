use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::timeline::application::ports::incoming::use_cases::{
    DeleteTimelineEntryError, DeleteTimelineEntryUseCase,
};
use crate::modules::timeline::application::ports::outgoing::timeline_repository::TimelineRepository;

pub struct DeleteTimelineEntryService<R>
where
    R: TimelineRepository,
{
    timeline_repository: R,
}

impl<R> DeleteTimelineEntryService<R>
where
    R: TimelineRepository,
{
    pub fn new(timeline_repository: R) -> Self {
        Self {
            timeline_repository,
        }
    }
}

#[async_trait]
impl<R> DeleteTimelineEntryUseCase for DeleteTimelineEntryService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(&self, entry_id: Uuid) -> Result<bool, DeleteTimelineEntryError> {
        self.timeline_repository
            .delete(entry_id)
            .await
            .map_err(|e| DeleteTimelineEntryError::RepositoryError(e.to_string()))
    }
}
