use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogTopic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogTopicsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetBlogTopicsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogTopic>, GetBlogTopicsError>;
}
