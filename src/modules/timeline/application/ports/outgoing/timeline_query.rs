// src/modules/timeline/application/ports/outgoing/timeline_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::shared::content::ListOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSortField {
    OrderIndex,
    Year,
    CreatedAt,
}

pub type TimelineOrder = ListOrder<TimelineSortField>;

pub fn default_timeline_order() -> TimelineOrder {
    ListOrder::asc(TimelineSortField::OrderIndex)
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TimelineQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait TimelineQuery: Send + Sync {
    async fn list(&self, order: TimelineOrder) -> Result<Vec<TimelineEntry>, TimelineQueryError>;
}
