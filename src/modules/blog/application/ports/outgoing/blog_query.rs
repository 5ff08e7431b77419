// src/modules/blog/application/ports/outgoing/blog_query.rs

use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{BlogPost, BlogTopic};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Blog catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the blog catalog, in publication order.
#[async_trait]
pub trait BlogQuery: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, BlogQueryError>;

    async fn list_topics(&self) -> Result<Vec<BlogTopic>, BlogQueryError>;
}
