use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

fn validate(mut data: CreateProjectData) -> Result<CreateProjectData, ValidationError> {
    data.slug = validation::slug("slug", &data.slug)?;
    validation::required_text("title", &data.title, MAX_TITLE_LEN)?;
    validation::non_blank_items("tags", &data.tags)?;
    validation::optional_url("github_url", data.github_url.as_deref())?;
    validation::optional_url("live_url", data.live_url.as_deref())?;
    Ok(data)
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: CreateProjectData) -> Result<Project, CreateProjectError> {
        let data = validate(data)?;

        self.project_repository
            .create(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
                ProjectRepositoryError::DatabaseError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })
    }
}
