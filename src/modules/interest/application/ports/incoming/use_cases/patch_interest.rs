use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::outgoing::interest_repository::PatchInterestData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchInterestError {
    #[error("Invalid patch: {0}")]
    Validation(#[from] ValidationError),

    #[error("Interest not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchInterestUseCase: Send + Sync {
    async fn execute(
        &self,
        interest_id: Uuid,
        data: PatchInterestData,
    ) -> Result<Interest, PatchInterestError>;
}
