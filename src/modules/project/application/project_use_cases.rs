use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectBySlugUseCase, GetProjectsUseCase,
    PatchProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
