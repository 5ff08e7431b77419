use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<bool, DeleteProjectError> {
        self.project_repository
            .delete(project_id)
            .await
            .map_err(|e| DeleteProjectError::RepositoryError(e.to_string()))
    }
}
