use async_trait::async_trait;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::incoming::use_cases::{
    GetInterestsError, GetInterestsUseCase,
};
use crate::modules::interest::application::ports::outgoing::interest_query::{
    InterestListFilter, InterestOrder, InterestQuery,
};

pub struct GetInterestsService<Q>
where
    Q: InterestQuery,
{
    query: Q,
}

impl<Q> GetInterestsService<Q>
where
    Q: InterestQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetInterestsUseCase for GetInterestsService<Q>
where
    Q: InterestQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: InterestListFilter,
        order: InterestOrder,
    ) -> Result<Vec<Interest>, GetInterestsError> {
        self.query
            .list(filter, order)
            .await
            .map_err(|e| GetInterestsError::QueryFailed(e.to_string()))
    }
}
