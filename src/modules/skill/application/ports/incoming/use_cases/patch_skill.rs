use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_repository::PatchSkillData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchSkillError {
    #[error("Invalid patch: {0}")]
    Validation(#[from] ValidationError),

    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: Uuid, data: PatchSkillData) -> Result<Skill, PatchSkillError>;
}
