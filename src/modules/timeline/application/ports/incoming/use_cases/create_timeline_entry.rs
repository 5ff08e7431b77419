use async_trait::async_trait;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::outgoing::timeline_repository::CreateTimelineEntryData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTimelineEntryError {
    #[error("Invalid timeline entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTimelineEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateTimelineEntryData,
    ) -> Result<TimelineEntry, CreateTimelineEntryError>;
}
