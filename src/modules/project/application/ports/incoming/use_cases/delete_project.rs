use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    /// `Ok(false)` when there was nothing to delete.
    async fn execute(&self, project_id: Uuid) -> Result<bool, DeleteProjectError>;
}
