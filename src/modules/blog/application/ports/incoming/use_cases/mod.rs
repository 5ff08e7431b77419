mod get_blog_posts;
mod get_blog_topics;

pub use get_blog_posts::{GetBlogPostsError, GetBlogPostsUseCase};
pub use get_blog_topics::{GetBlogTopicsError, GetBlogTopicsUseCase};
