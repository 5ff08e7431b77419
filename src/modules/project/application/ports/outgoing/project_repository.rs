// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    Project, ProjectCategory, ProjectStatus, TechStack,
};
use crate::shared::content::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectData {
    /// Slug is immutable: only set at creation time
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
    pub description: String,
    pub long_description: String,
    pub image: Option<String>,
    pub status: ProjectStatus,
    pub project_date: NaiveDate,
    pub duration: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub screenshots: Vec<String>,
    pub tech_stack: TechStack,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Patch semantics:
/// - required columns: Unset => keep, Value => replace (Null is rejected by the use case)
/// - lists/tech_stack: Value => replace whole value (no merge)
/// - optional columns: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub category: PatchField<ProjectCategory>,
    pub description: PatchField<String>,
    pub long_description: PatchField<String>,
    pub image: PatchField<String>,
    pub status: PatchField<ProjectStatus>,
    pub project_date: PatchField<NaiveDate>,
    pub duration: PatchField<String>,
    pub team: PatchField<String>,
    pub role: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub features: PatchField<Vec<String>>,
    pub challenges: PatchField<Vec<String>>,
    pub solutions: PatchField<Vec<String>>,
    pub screenshots: PatchField<Vec<String>>,
    pub tech_stack: PatchField<TechStack>,
    pub github_url: PatchField<String>,
    pub live_url: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Unique slug violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;

    /// Slug is immutable and MUST NOT be patchable. `updated_at` is set here.
    async fn patch(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    /// `false` when no row had this id.
    async fn delete(&self, project_id: Uuid) -> Result<bool, ProjectRepositoryError>;
}
