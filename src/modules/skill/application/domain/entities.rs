// src/modules/skill/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

crate::label_enum! {
    /// Declaration order is proficiency order.
    #[derive(PartialOrd, Ord)]
    pub enum SkillLevel: "skill level" {
        Rudimentary => "Rudimentary",
        Intermediate => "Intermediate",
        Proficient => "Proficient",
        Expert => "Expert",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub technologies: Vec<String>,
    pub color: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
