pub mod entities;

pub use entities::{BlogCategory, BlogPost, BlogTopic};
