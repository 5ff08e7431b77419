mod get_blog_posts_service;
mod get_blog_topics_service;

pub use get_blog_posts_service::GetBlogPostsService;
pub use get_blog_topics_service::GetBlogTopicsService;
