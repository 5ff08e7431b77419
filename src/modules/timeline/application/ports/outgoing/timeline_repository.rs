// src/modules/timeline/application/ports/outgoing/timeline_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::timeline::application::domain::entities::{TimelineEntry, TimelineEntryType};
use crate::shared::content::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTimelineEntryData {
    pub year: String,
    pub title: String,
    pub entry_type: TimelineEntryType,
    pub description: String,
    pub location: String,
    pub technologies: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub status: Option<String>,
    pub order_index: i32,
}

/// `technologies`, `achievements` and `status` may be cleared with `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchTimelineEntryData {
    pub year: PatchField<String>,
    pub title: PatchField<String>,
    pub entry_type: PatchField<TimelineEntryType>,
    pub description: PatchField<String>,
    pub location: PatchField<String>,
    pub technologies: PatchField<Vec<String>>,
    pub achievements: PatchField<Vec<String>>,
    pub status: PatchField<String>,
    pub order_index: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TimelineRepositoryError {
    #[error("Timeline entry not found")]
    NotFound,

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
pub trait TimelineRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateTimelineEntryData,
    ) -> Result<TimelineEntry, TimelineRepositoryError>;

    async fn patch(
        &self,
        entry_id: Uuid,
        data: PatchTimelineEntryData,
    ) -> Result<TimelineEntry, TimelineRepositoryError>;

    async fn delete(&self, entry_id: Uuid) -> Result<bool, TimelineRepositoryError>;
}
