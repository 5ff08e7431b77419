// src/modules/timeline/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

crate::label_enum! {
    pub enum TimelineEntryType: "timeline entry type" {
        Work => "work",
        Education => "education",
        Leadership => "leadership",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntry {
    pub id: Uuid,
    /// Free-form period label such as `2021-2023`
    pub year: String,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: TimelineEntryType,
    pub description: String,
    pub location: String,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub status: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
