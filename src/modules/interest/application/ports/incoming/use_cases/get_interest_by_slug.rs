use async_trait::async_trait;

use crate::modules::interest::application::domain::entities::Interest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInterestBySlugError {
    #[error("Interest not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetInterestBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Interest, GetInterestBySlugError>;
}
