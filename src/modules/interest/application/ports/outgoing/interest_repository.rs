// src/modules/interest/application/ports/outgoing/interest_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::shared::content::{Icon, PatchField};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInterestData {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub category: InterestCategory,
    pub interest_type: InterestType,
    pub icon: Icon,
    pub color: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

/// `content` is the only nullable column; slug stays fixed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchInterestData {
    pub title: PatchField<String>,
    pub excerpt: PatchField<String>,
    pub content: PatchField<String>,
    pub category: PatchField<InterestCategory>,
    pub interest_type: PatchField<InterestType>,
    pub icon: PatchField<Icon>,
    pub color: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub featured: PatchField<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum InterestRepositoryError {
    #[error("Interest not found")]
    NotFound,

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
pub trait InterestRepository: Send + Sync {
    async fn create(&self, data: CreateInterestData) -> Result<Interest, InterestRepositoryError>;

    async fn patch(
        &self,
        interest_id: Uuid,
        data: PatchInterestData,
    ) -> Result<Interest, InterestRepositoryError>;

    async fn delete(&self, interest_id: Uuid) -> Result<bool, InterestRepositoryError>;
}
