// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillLevel};
use crate::shared::content::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateSkillData {
    pub name: String,
    pub level: SkillLevel,
    pub technologies: Vec<String>,
    pub color: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSkillData {
    pub name: PatchField<String>,
    pub level: PatchField<SkillLevel>,
    pub technologies: PatchField<Vec<String>>,
    pub color: PatchField<String>,
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError>;

    async fn patch(&self, skill_id: Uuid, data: PatchSkillData)
        -> Result<Skill, SkillRepositoryError>;

    async fn delete(&self, skill_id: Uuid) -> Result<bool, SkillRepositoryError>;
}
