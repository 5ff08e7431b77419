// src/modules/interest/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::Icon;
use crate::shared::filter_view::Searchable;

crate::label_enum! {
    pub enum InterestCategory: "interest category" {
        Technical => "Technical",
        Social => "Social",
    }
}

crate::label_enum! {
    pub enum InterestType: "interest type" {
        CreativeTechnology => "Creative Technology",
        ArtsAndCulture => "Arts & Culture",
        EmergingTech => "Emerging Tech",
        DesignAndPsychology => "Design & Psychology",
        CreativeArts => "Creative Arts",
        PhilosophyAndEthics => "Philosophy & Ethics",
        CulturalStudies => "Cultural Studies",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Interest {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub category: InterestCategory,
    #[serde(rename = "type")]
    pub interest_type: InterestType,
    pub icon: Icon,
    /// Theme color token, e.g. `purple`
    pub color: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Searchable for Interest {
    type Category = InterestCategory;

    fn category(&self) -> InterestCategory {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_type_labels_keep_ampersands() {
        assert_eq!(InterestType::ArtsAndCulture.as_str(), "Arts & Culture");
        assert_eq!(
            "Philosophy & Ethics".parse::<InterestType>(),
            Ok(InterestType::PhilosophyAndEthics)
        );
        assert_eq!(InterestType::ALL.len(), 7);
    }

    #[test]
    fn serializes_with_labels() {
        let json = serde_json::to_value(InterestCategory::Technical).unwrap();
        assert_eq!(json, "Technical");
    }
}
