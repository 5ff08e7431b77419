use async_trait::async_trait;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::outgoing::interest_repository::CreateInterestData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateInterestError {
    #[error("Invalid interest: {0}")]
    Validation(#[from] ValidationError),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateInterestUseCase: Send + Sync {
    async fn execute(&self, data: CreateInterestData) -> Result<Interest, CreateInterestError>;
}
