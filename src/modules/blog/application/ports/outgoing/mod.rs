pub mod blog_query;

pub use blog_query::{BlogQuery, BlogQueryError};
