// src/modules/blog/adapter/outgoing/static_blog_catalog.rs
//
// Posts and topics ship inside the binary and are parsed once at startup.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::blog::application::domain::entities::{BlogPost, BlogTopic};
use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogQueryError};

const POSTS_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/blog_posts.json"));
const TOPICS_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/blog_topics.json"));

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed blog posts document: {0}")]
    Posts(#[source] serde_json::Error),

    #[error("malformed blog topics document: {0}")]
    Topics(#[source] serde_json::Error),

    #[error("duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: &'static str, slug: String },
}

#[derive(Debug, Clone)]
pub struct StaticBlogCatalog {
    posts: Arc<Vec<BlogPost>>,
    topics: Arc<Vec<BlogTopic>>,
}

impl StaticBlogCatalog {
    /// Parses the documents compiled into the binary.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(POSTS_JSON, TOPICS_JSON)
    }

    pub fn from_json(posts_json: &str, topics_json: &str) -> Result<Self, CatalogError> {
        let posts: Vec<BlogPost> = serde_json::from_str(posts_json).map_err(CatalogError::Posts)?;
        let topics: Vec<BlogTopic> =
            serde_json::from_str(topics_json).map_err(CatalogError::Topics)?;

        ensure_unique_slugs("post", posts.iter().map(|p| p.slug.as_str()))?;
        ensure_unique_slugs("topic", topics.iter().map(|t| t.slug.as_str()))?;

        Ok(Self {
            posts: Arc::new(posts),
            topics: Arc::new(topics),
        })
    }
}

fn ensure_unique_slugs<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl BlogQuery for StaticBlogCatalog {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, BlogQueryError> {
        Ok(self.posts.as_ref().clone())
    }

    async fn list_topics(&self) -> Result<Vec<BlogTopic>, BlogQueryError> {
        Ok(self.topics.as_ref().clone())
    }
}
