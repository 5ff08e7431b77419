// src/modules/skill/application/ports/outgoing/skill_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::skill::application::domain::entities::Skill;
use crate::shared::content::ListOrder;

/// `level` is stored as a label, so it is not offered as a sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillSortField {
    OrderIndex,
    Name,
    CreatedAt,
}

pub type SkillOrder = ListOrder<SkillSortField>;

pub fn default_skill_order() -> SkillOrder {
    ListOrder::asc(SkillSortField::OrderIndex)
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list(&self, order: SkillOrder) -> Result<Vec<Skill>, SkillQueryError>;
}
