use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: Uuid) -> Result<bool, DeleteSkillError>;
}
