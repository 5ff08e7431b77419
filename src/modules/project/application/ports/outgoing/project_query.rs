// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::shared::content::ListOrder;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSortField {
    CreatedAt,
    UpdatedAt,
    ProjectDate,
    Title,
}

pub type ProjectOrder = ListOrder<ProjectSortField>;

/// Newest first.
pub fn default_project_order() -> ProjectOrder {
    ListOrder::desc(ProjectSortField::CreatedAt)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub category: Option<ProjectCategory>,
    pub limit: Option<u64>,
}

impl ProjectListFilter {
    pub fn recent(limit: u64) -> Self {
        Self {
            category: None,
            limit: Some(limit),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Listing with optional category/limit. An empty filter lists every
    /// project.
    async fn list(
        &self,
        filter: ProjectListFilter,
        order: ProjectOrder,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    /// Slug is trimmed and lowercased before lookup.
    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError>;
}
