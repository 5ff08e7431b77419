use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};

pub struct GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectBySlugUseCase for GetProjectBySlugService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectBySlugError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetProjectBySlugError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetProjectBySlugError::RepositoryError(msg),
            ProjectQueryError::SerializationError(msg) => {
                GetProjectBySlugError::RepositoryError(msg)
            }
        })
    }
}
