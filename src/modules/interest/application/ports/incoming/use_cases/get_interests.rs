use async_trait::async_trait;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::outgoing::interest_query::{
    InterestListFilter, InterestOrder,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInterestsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetInterestsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: InterestListFilter,
        order: InterestOrder,
    ) -> Result<Vec<Interest>, GetInterestsError>;
}
