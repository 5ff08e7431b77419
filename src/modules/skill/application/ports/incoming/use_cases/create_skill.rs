use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_repository::CreateSkillData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Invalid skill: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: CreateSkillData) -> Result<Skill, CreateSkillError>;
}
