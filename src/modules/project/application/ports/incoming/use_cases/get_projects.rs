use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectOrder,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
        order: ProjectOrder,
    ) -> Result<Vec<Project>, GetProjectsError>;
}
