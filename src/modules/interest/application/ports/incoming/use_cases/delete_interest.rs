use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteInterestError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteInterestUseCase: Send + Sync {
    async fn execute(&self, interest_id: Uuid) -> Result<bool, DeleteInterestError>;
}
