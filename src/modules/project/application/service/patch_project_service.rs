use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

fn validate(data: &PatchProjectData) -> Result<(), ValidationError> {
    validation::not_null("title", &data.title)?;
    validation::not_null("category", &data.category)?;
    validation::not_null("description", &data.description)?;
    validation::not_null("long_description", &data.long_description)?;
    validation::not_null("status", &data.status)?;
    validation::not_null("project_date", &data.project_date)?;
    validation::not_null("tags", &data.tags)?;
    validation::not_null("features", &data.features)?;
    validation::not_null("challenges", &data.challenges)?;
    validation::not_null("solutions", &data.solutions)?;
    validation::not_null("screenshots", &data.screenshots)?;
    validation::not_null("tech_stack", &data.tech_stack)?;

    if let Some(title) = data.title.as_value() {
        validation::required_text("title", title, MAX_TITLE_LEN)?;
    }
    if let Some(tags) = data.tags.as_value() {
        validation::non_blank_items("tags", tags)?;
    }
    validation::optional_url("github_url", data.github_url.as_value().map(String::as_str))?;
    validation::optional_url("live_url", data.live_url.as_value().map(String::as_str))?;

    Ok(())
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, PatchProjectError> {
        validate(&data)?;

        self.project_repository
            .patch(project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => PatchProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    PatchProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SerializationError(msg) => {
                    PatchProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::SlugAlreadyExists => PatchProjectError::RepositoryError(
                    "unexpected slug conflict while patching project".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    use crate::modules::project::application::domain::entities::{ProjectCategory, ProjectStatus};
    use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;
    use crate::shared::content::PatchField;
    use crate::tests::support::project_test_fixtures::sample_project;

    mock! {
        pub ProjectRepositoryMock {}
        #[async_trait]
        impl ProjectRepository for ProjectRepositoryMock {
            async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;
            async fn patch(&self, project_id: Uuid, data: PatchProjectData) -> Result<Project, ProjectRepositoryError>;
            async fn delete(&self, project_id: Uuid) -> Result<bool, ProjectRepositoryError>;
        }
    }

    #[tokio::test]
    async fn patches_only_given_fields() {
        let project_id = Uuid::new_v4();
        let patch = PatchProjectData {
            status: PatchField::Value(ProjectStatus::InProgress),
            live_url: PatchField::Null,
            ..Default::default()
        };

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_patch()
            .with(eq(project_id), eq(patch.clone()))
            .times(1)
            .returning(|id, _| {
                let mut project =
                    sample_project("caks", "CAKS", ProjectCategory::WebApplication, &[]);
                project.id = id;
                project.status = ProjectStatus::InProgress;
                Ok(project)
            });

        let service = PatchProjectService::new(repo);
        let project = service.execute(project_id, patch).await.unwrap();

        assert_eq!(project.id, project_id);
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[tokio::test]
    async fn nulling_required_field_is_rejected() {
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_patch().never();

        let service = PatchProjectService::new(repo);
        let err = service
            .execute(
                Uuid::new_v4(),
                PatchProjectData {
                    title: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PatchProjectError::Validation(e) if e.field == "title"));
    }

    #[tokio::test]
    async fn invalid_link_is_rejected() {
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_patch().never();

        let service = PatchProjectService::new(repo);
        let err = service
            .execute(
                Uuid::new_v4(),
                PatchProjectData {
                    github_url: PatchField::Value("github.com/example".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PatchProjectError::Validation(e) if e.field == "github_url"));
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_patch()
            .times(1)
            .returning(|_, _| Err(ProjectRepositoryError::NotFound));

        let service = PatchProjectService::new(repo);
        let err = service
            .execute(Uuid::new_v4(), PatchProjectData::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PatchProjectError::NotFound));
    }

    #[tokio::test]
    async fn database_error_maps_to_repository_error() {
        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_patch()
            .times(1)
            .returning(|_, _| Err(ProjectRepositoryError::DatabaseError("db down".to_string())));

        let service = PatchProjectService::new(repo);
        let err = service
            .execute(Uuid::new_v4(), PatchProjectData::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PatchProjectError::RepositoryError(_)));
    }
}
