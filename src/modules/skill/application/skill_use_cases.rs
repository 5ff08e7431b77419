use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase, PatchSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
