mod create_project;
mod delete_project;
mod get_project_by_slug;
mod get_projects;
mod patch_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_project_by_slug::*;
pub use get_projects::*;
pub use patch_project::*;
