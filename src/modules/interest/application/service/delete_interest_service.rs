use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::interest::application::ports::incoming::use_cases::{
    DeleteInterestError, DeleteInterestUseCase,
};
use crate::modules::interest::application::ports::outgoing::interest_repository::InterestRepository;

pub struct DeleteInterestService<R>
where
    R: InterestRepository,
{
    interest_repository: R,
}

impl<R> DeleteInterestService<R>
where
    R: InterestRepository,
{
    pub fn new(interest_repository: R) -> Self {
        Self {
            interest_repository,
        }
    }
}

#[async_trait]
impl<R> DeleteInterestUseCase for DeleteInterestService<R>
where
    R: InterestRepository + Send + Sync,
{
    async fn execute(&self, interest_id: Uuid) -> Result<bool, DeleteInterestError> {
        self.interest_repository
            .delete(interest_id)
            .await
            .map_err(|e| DeleteInterestError::RepositoryError(e.to_string()))
    }
}
