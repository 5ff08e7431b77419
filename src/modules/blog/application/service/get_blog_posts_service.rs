use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsError, GetBlogPostsUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogQuery;

pub struct GetBlogPostsService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogPostsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostsUseCase for GetBlogPostsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, GetBlogPostsError> {
        self.query
            .list_posts()
            .await
            .map_err(|e| GetBlogPostsError::QueryFailed(e.to_string()))
    }
}
