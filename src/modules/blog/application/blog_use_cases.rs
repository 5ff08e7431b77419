use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsUseCase, GetBlogTopicsUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_posts: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub get_topics: Arc<dyn GetBlogTopicsUseCase + Send + Sync>,
}
