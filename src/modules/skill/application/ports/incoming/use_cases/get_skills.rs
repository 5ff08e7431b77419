use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_query::SkillOrder;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self, order: SkillOrder) -> Result<Vec<Skill>, GetSkillsError>;
}
