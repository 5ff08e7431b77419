use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTimelineEntryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTimelineEntryUseCase: Send + Sync {
    async fn execute(&self, entry_id: Uuid) -> Result<bool, DeleteTimelineEntryError>;
}
