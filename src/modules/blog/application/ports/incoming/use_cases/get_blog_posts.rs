use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetBlogPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetBlogPostsError>;
}
