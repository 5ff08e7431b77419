use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::outgoing::timeline_repository::PatchTimelineEntryData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchTimelineEntryError {
    #[error("Invalid patch: {0}")]
    Validation(#[from] ValidationError),

    #[error("Timeline entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchTimelineEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        entry_id: Uuid,
        data: PatchTimelineEntryData,
    ) -> Result<TimelineEntry, PatchTimelineEntryError>;
}
