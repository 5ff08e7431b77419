use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillRepository,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

fn validate(mut data: CreateSkillData) -> Result<CreateSkillData, ValidationError> {
    validation::required_text("name", &data.name, MAX_TITLE_LEN)?;
    validation::non_blank_items("technologies", &data.technologies)?;
    data.name = data.name.trim().to_string();
    Ok(data)
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, data: CreateSkillData) -> Result<Skill, CreateSkillError> {
        let data = validate(data)?;

        self.skill_repository
            .create(data)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}
