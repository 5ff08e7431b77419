// src/modules/contact/application/ports/outgoing/contact_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::shared::content::ListOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactSortField {
    DisplayOrder,
    Label,
    CreatedAt,
}

pub type ContactOrder = ListOrder<ContactSortField>;

pub fn default_contact_order() -> ContactOrder {
    ListOrder::asc(ContactSortField::DisplayOrder)
}

/// Inactive entries are never returned, whatever the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactListFilter {
    pub contact_type: Option<ContactType>,
}

impl ContactListFilter {
    pub fn of_type(contact_type: ContactType) -> Self {
        Self {
            contact_type: Some(contact_type),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    async fn list(
        &self,
        filter: ContactListFilter,
        order: ContactOrder,
    ) -> Result<Vec<ContactInfo>, ContactQueryError>;
}
