use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogTopic;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogTopicsError, GetBlogTopicsUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogQuery;

pub struct GetBlogTopicsService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogTopicsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogTopicsUseCase for GetBlogTopicsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogTopic>, GetBlogTopicsError> {
        self.query
            .list_topics()
            .await
            .map_err(|e| GetBlogTopicsError::QueryFailed(e.to_string()))
    }
}
