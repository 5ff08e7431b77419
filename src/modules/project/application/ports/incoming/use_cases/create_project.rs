use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Invalid project: {0}")]
    Validation(#[from] ValidationError),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<Project, CreateProjectError>;
}
