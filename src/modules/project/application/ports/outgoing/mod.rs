pub mod project_query;
pub mod project_repository;

pub use project_query::{
    default_project_order, ProjectListFilter, ProjectOrder, ProjectQuery, ProjectQueryError,
    ProjectSortField,
};
pub use project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
