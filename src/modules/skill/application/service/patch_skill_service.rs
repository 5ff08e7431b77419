use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    PatchSkillError, PatchSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    PatchSkillData, SkillRepository, SkillRepositoryError,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct PatchSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> PatchSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

fn validate(data: &PatchSkillData) -> Result<(), ValidationError> {
    validation::not_null("name", &data.name)?;
    validation::not_null("level", &data.level)?;
    validation::not_null("technologies", &data.technologies)?;
    validation::not_null("color", &data.color)?;
    validation::not_null("order_index", &data.order_index)?;

    if let Some(name) = data.name.as_value() {
        validation::required_text("name", name, MAX_TITLE_LEN)?;
    }
    if let Some(technologies) = data.technologies.as_value() {
        validation::non_blank_items("technologies", technologies)?;
    }
    Ok(())
}

#[async_trait]
impl<R> PatchSkillUseCase for PatchSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, skill_id: Uuid, data: PatchSkillData) -> Result<Skill, PatchSkillError> {
        validate(&data)?;

        self.skill_repository
            .patch(skill_id, data)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => PatchSkillError::NotFound,
                SkillRepositoryError::DatabaseError(msg)
                | SkillRepositoryError::SerializationError(msg) => {
                    PatchSkillError::RepositoryError(msg)
                }
            })
    }
}
