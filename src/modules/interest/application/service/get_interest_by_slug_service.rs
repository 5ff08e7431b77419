use async_trait::async_trait;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::incoming::use_cases::{
    GetInterestBySlugError, GetInterestBySlugUseCase,
};
use crate::modules::interest::application::ports::outgoing::interest_query::{
    InterestQuery, InterestQueryError,
};

pub struct GetInterestBySlugService<Q>
where
    Q: InterestQuery,
{
    query: Q,
}

impl<Q> GetInterestBySlugService<Q>
where
    Q: InterestQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetInterestBySlugUseCase for GetInterestBySlugService<Q>
where
    Q: InterestQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Interest, GetInterestBySlugError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            InterestQueryError::NotFound => GetInterestBySlugError::NotFound,
            InterestQueryError::DatabaseError(msg) | InterestQueryError::SerializationError(msg) => {
                GetInterestBySlugError::RepositoryError(msg)
            }
        })
    }
}
