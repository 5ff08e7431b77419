use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::incoming::use_cases::{
    DeleteSkillError, DeleteSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::SkillRepository;

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: Uuid) -> Result<bool, DeleteSkillError> {
        self.skill_repository
            .delete(skill_id)
            .await
            .map_err(|e| DeleteSkillError::RepositoryError(e.to_string()))
    }
}
