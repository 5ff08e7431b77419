// src/modules/interest/application/ports/outgoing/interest_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::shared::content::ListOrder;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InterestSortField {
    CreatedAt,
    UpdatedAt,
    Title,
}

pub type InterestOrder = ListOrder<InterestSortField>;

pub fn default_interest_order() -> InterestOrder {
    ListOrder::desc(InterestSortField::CreatedAt)
}

/// Every set field is an equality predicate; unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestListFilter {
    pub category: Option<InterestCategory>,
    pub featured: Option<bool>,
    pub interest_type: Option<InterestType>,
}

impl InterestListFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Default::default()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum InterestQueryError {
    #[error("Interest not found")]
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
pub trait InterestQuery: Send + Sync {
    async fn list(
        &self,
        filter: InterestListFilter,
        order: InterestOrder,
    ) -> Result<Vec<Interest>, InterestQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Interest, InterestQueryError>;
}
