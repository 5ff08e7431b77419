// src/modules/blog/application/domain/entities.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::content::Icon;
use crate::shared::filter_view::Searchable;

crate::label_enum! {
    pub enum BlogCategory: "blog category" {
        GameDevelopment => "Game Development",
        WebDevelopment => "Web Development",
        SystemProgramming => "System Programming",
        Leadership => "Leadership",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    #[schema(value_type = String, format = Date)]
    pub publish_date: NaiveDate,
    /// Display string, e.g. `8 min read`
    pub read_time: String,
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogTopic {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub post_count: u32,
    pub color: String,
    pub tags: Vec<String>,
}

impl Searchable for BlogPost {
    type Category = BlogCategory;

    fn category(&self) -> BlogCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
