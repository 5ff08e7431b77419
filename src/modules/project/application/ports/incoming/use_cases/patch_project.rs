use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::PatchProjectData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchProjectError {
    #[error("Invalid patch: {0}")]
    Validation(#[from] ValidationError),

    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, PatchProjectError>;
}
